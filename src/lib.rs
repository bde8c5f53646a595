//! Flapper - Terminal Flappy Bird Library
//!
//! This module exposes the headless game core for testing and external use.

pub mod core;
pub mod utils;

pub use crate::core::{
    FrameResult, Game, GameConfig, GameEvent, GamePhase, GameSession, InputEvent, InputSource,
    Snapshot, SpawnTimer, TickResult,
};
pub use crate::utils::{load_high_score, MemoryScoreStore, ScoreFile, ScoreStore};

// UI and input live in the binary; they are tightly coupled to the terminal.
