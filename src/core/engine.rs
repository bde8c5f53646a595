//! Per-tick collision and scoring.
//!
//! [`advance`] is the only place the simulation moves. It runs the ordered
//! steps of one tick while the session is `Running` and reports what
//! happened so the state machine can react without re-deriving it.

use super::session::{GamePhase, GameSession};

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// The session was running, so the tick actually advanced anything.
    pub advanced: bool,
    /// Pipes passed during this tick (each counts once, ever).
    pub scored: u32,
    /// The bird's hitbox touched at least one pipe.
    pub pipe_collision: bool,
    /// The bird reached the ground and was clamped onto it.
    pub hit_floor: bool,
    /// The bird reached the top edge and was clamped below it.
    pub hit_ceiling: bool,
}

impl TickResult {
    pub fn is_terminal(&self) -> bool {
        self.pipe_collision || self.hit_floor
    }
}

/// Advance a running session by one tick.
///
/// Order:
/// 1. bird gravity step
/// 2. every pipe, in creation order: move, score if just passed, collide
/// 3. drop pipes that scrolled off the left edge
/// 4. clamp the bird to the sky: floor ends the run, ceiling only stops it
///
/// Collisions do not short-circuit the loop; all pipes still move and score.
pub fn advance(session: &mut GameSession) -> TickResult {
    let mut result = TickResult::default();
    if session.phase != GamePhase::Running {
        return result;
    }
    result.advanced = true;
    session.tick_count += 1;

    let speed = session.config.pipe_speed;

    // 1. Bird
    session.bird.tick();
    let hitbox = session.bird.hitbox();
    let bird_x = session.bird.x;

    // 2. Pipes
    for pipe in &mut session.pipes {
        pipe.tick(speed);

        if !pipe.passed && pipe.trailing_edge() < bird_x {
            pipe.passed = true;
            session.score += 1;
            result.scored += 1;
        }

        if pipe.collides_with(&hitbox) {
            result.pipe_collision = true;
        }
    }

    // 3. Prune
    session.pipes.retain(|p| !p.is_offscreen());

    // 4. Bounds
    let floor = session.config.floor_y();
    let bird = &mut session.bird;
    if bird.bottom() >= floor {
        bird.y = floor - bird.radius;
        result.hit_floor = true;
    }
    if bird.top() <= 0.0 {
        bird.y = bird.radius;
        bird.velocity = 0.0;
        result.hit_ceiling = true;
    }

    let width = session.config.screen_width as f64;
    session.ground_offset = (session.ground_offset - speed).rem_euclid(width);

    if result.is_terminal() {
        session.phase = GamePhase::GameOver;
    }

    result
}
