//! The game session aggregate: bird, pipes, score and phase.

use super::bird::Bird;
use super::config::GameConfig;
use super::pipe::Pipe;

/// Where the session is in its lifecycle.
///
/// Resetting is not a phase: it happens instantly on the input that leaves
/// `GameOver` and lands back in `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh session, bird at rest, waiting for the first input.
    NotStarted,
    /// Physics, spawning and scoring are live.
    Running,
    /// The run ended; the next input resets.
    GameOver,
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active pipes in creation order (also left-to-right screen order).
    pub pipes: Vec<Pipe>,
    /// Pipes passed during the current run.
    pub score: u32,
    /// Best score seen by this process, seeded from persistence.
    pub high_score: u32,
    /// Horizontal scroll of the ground stripes, in `[0, screen_width)`.
    pub ground_offset: f64,
    /// Simulation ticks advanced in the current run.
    pub tick_count: u64,
}

impl GameSession {
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            bird: Bird::new(&config),
            pipes: Vec::new(),
            score: 0,
            high_score,
            ground_offset: 0.0,
            tick_count: 0,
            config,
        }
    }

    /// Back to a fresh `NotStarted` session. The high score and the ground
    /// scroll position carry over.
    pub fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.tick_count = 0;
    }

    /// Record the current score as the best if it beats it. Returns true if
    /// the high score changed.
    pub fn update_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
