//! Read-only view of a session for the renderer and cue player.

use super::session::{GamePhase, GameSession};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeView {
    pub x: f64,
    pub width: f64,
    pub gap_center: f64,
    pub gap_top: f64,
    pub gap_bottom: f64,
}

/// Everything a frame needs to draw, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub screen_width: f64,
    pub screen_height: f64,
    /// Top of the ground strip.
    pub floor_y: f64,
    pub ground_offset: f64,
    pub bird_x: f64,
    pub bird_y: f64,
    pub bird_radius: f64,
    /// Tilt in degrees, positive = nose up.
    pub bird_angle: f64,
    pub pipes: Vec<PipeView>,
    pub score: u32,
    pub high_score: u32,
    /// Simulated flight time of the current run.
    pub elapsed_secs: f64,
}

impl Snapshot {
    pub fn of(session: &GameSession) -> Self {
        let config = &session.config;
        Self {
            phase: session.phase,
            screen_width: config.screen_width as f64,
            screen_height: config.screen_height as f64,
            floor_y: config.floor_y(),
            ground_offset: session.ground_offset,
            bird_x: session.bird.x,
            bird_y: session.bird.y,
            bird_radius: session.bird.radius,
            bird_angle: session.bird.angle(),
            pipes: session
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    width: p.width,
                    gap_center: p.gap_center,
                    gap_top: p.gap_top(),
                    gap_bottom: p.gap_bottom(),
                })
                .collect(),
            score: session.score,
            high_score: session.high_score,
            elapsed_secs: session.tick_count as f64 / config.tick_rate.max(1) as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::pipe::Pipe;

    #[test]
    fn test_snapshot_mirrors_session() {
        let config = GameConfig::default();
        let mut session = GameSession::new(config.clone(), 4);
        session.pipes.push(Pipe::new(300.0, 200.0, &config));
        session.score = 2;
        session.tick_count = 90;
        session.bird.tick();

        let snap = Snapshot::of(&session);
        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert_eq!(snap.floor_y, 550.0);
        assert_eq!(snap.bird_y, session.bird.y);
        assert_eq!(snap.bird_angle, session.bird.angle());
        // One tick of gravity from rest: -(0.45 * 3), slightly nose down.
        assert!((snap.bird_angle + 1.35).abs() < 1e-9);
        assert_eq!(snap.elapsed_secs, 1.5);
        assert_eq!(snap.score, 2);
        assert_eq!(snap.high_score, 4);
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].gap_top, 125.0);
        assert_eq!(snap.pipes[0].gap_bottom, 275.0);
    }
}
