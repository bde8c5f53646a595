//! Headless simulation: bird, pipes, spawning, collisions and the game
//! state machine.

pub mod bird;
pub mod config;
pub mod constants;
pub mod engine;
pub mod game;
pub mod geometry;
pub mod pipe;
pub mod session;
pub mod snapshot;
pub mod spawner;

pub use bird::Bird;
pub use config::GameConfig;
pub use engine::{advance, TickResult};
pub use game::{FrameResult, Game, GameEvent, InputEvent, InputSource};
pub use geometry::Rect;
pub use pipe::Pipe;
pub use session::{GamePhase, GameSession};
pub use snapshot::{PipeView, Snapshot};
pub use spawner::{spawn_pipe, SpawnTimer};
