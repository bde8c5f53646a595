//! Terminal rendering.

pub mod common;
pub mod flappy_scene;

use flapper::core::snapshot::Snapshot;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, snapshot);
}
