//! Utility modules: build info, logging, persistence.

pub mod build_info;
pub mod logging;
pub mod persistence;

pub use persistence::{load_high_score, MemoryScoreStore, ScoreFile, ScoreStore};
