//! Time-driven pipe spawning.
//!
//! The spawn cadence runs on wall-clock time, independent of simulation
//! ticks. [`SpawnTimer`] turns elapsed frame time into spawn signals; the
//! signals travel through the same event queue as player input and only
//! produce a pipe when they reach a running session.

use super::constants::MAX_SPAWNS_PER_FRAME;
use super::pipe::Pipe;
use super::session::GameSession;
use rand::Rng;
use std::time::Duration;

/// Periodic timer that fires every `interval`, regardless of game phase.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: Duration,
    /// Time accumulated since the last fire.
    accumulated: Duration,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Feed elapsed time. Returns the number of signals that fired, capped
    /// so a long stall does not dump a wall of pipes at once.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;

        let mut fired = 0u32;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired = fired.saturating_add(1);
        }
        fired.min(MAX_SPAWNS_PER_FRAME)
    }
}

/// Handle one spawn signal: append exactly one pipe just beyond the right
/// edge if the session is running. Returns whether a pipe was added.
pub fn spawn_pipe<R: Rng>(session: &mut GameSession, rng: &mut R) -> bool {
    if !session.phase.is_running() {
        return false;
    }
    let pipe = Pipe::spawn(session.config.spawn_x(), &session.config, rng);
    log::trace!(
        "pipe spawned at x={} gap_center={}",
        pipe.x,
        pipe.gap_center
    );
    session.pipes.push(pipe);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::session::GamePhase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_timer_fires_on_interval() {
        let mut timer = SpawnTimer::new(Duration::from_millis(1500));
        assert_eq!(timer.advance(Duration::from_millis(1000)), 0);
        assert_eq!(timer.advance(Duration::from_millis(499)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(Duration::from_millis(1499)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_timer_keeps_remainder() {
        let mut timer = SpawnTimer::new(Duration::from_millis(1500));
        assert_eq!(timer.advance(Duration::from_millis(1600)), 1);
        assert_eq!(timer.advance(Duration::from_millis(1399)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_timer_caps_burst_after_stall() {
        let mut timer = SpawnTimer::new(Duration::from_millis(1500));
        assert_eq!(timer.advance(Duration::from_secs(60)), MAX_SPAWNS_PER_FRAME);
        // The backlog is dropped, not carried into later frames.
        assert_eq!(timer.advance(Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_spawn_only_while_running() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut session = GameSession::new(GameConfig::default(), 0);

        assert!(!spawn_pipe(&mut session, &mut rng));
        assert!(session.pipes.is_empty());

        session.phase = GamePhase::GameOver;
        assert!(!spawn_pipe(&mut session, &mut rng));
        assert!(session.pipes.is_empty());

        session.phase = GamePhase::Running;
        assert!(spawn_pipe(&mut session, &mut rng));
        assert_eq!(session.pipes.len(), 1);
        assert_eq!(session.pipes[0].x, 520.0);
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut session = GameSession::new(GameConfig::default(), 0);
        session.phase = GamePhase::Running;
        spawn_pipe(&mut session, &mut rng);
        session.pipes[0].x = 100.0;
        spawn_pipe(&mut session, &mut rng);
        assert_eq!(session.pipes[0].x, 100.0);
        assert_eq!(session.pipes[1].x, 520.0);
    }
}
