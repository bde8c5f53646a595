// Screen and pacing
pub const SCREEN_WIDTH: u32 = 500;
pub const SCREEN_HEIGHT: u32 = 650;
pub const TICK_RATE: u32 = 60;
pub const GROUND_HEIGHT: u32 = 100;

// Bird physics (per tick, positive y = downward)
pub const GRAVITY: f64 = 0.45;
pub const FLAP_IMPULSE: f64 = -8.5;
pub const BIRD_X: f64 = 80.0;
pub const BIRD_RADIUS: f64 = 16.0;
pub const BIRD_WIDTH: f64 = 45.0;
pub const BIRD_HEIGHT: f64 = 40.0;
pub const HITBOX_SHRINK: f64 = 6.0; // total per axis, 3px each side

// Presentation angle (degrees) = clamp(-velocity * ANGLE_PER_VELOCITY, MIN, MAX)
pub const ANGLE_PER_VELOCITY: f64 = 3.0;
pub const MIN_ANGLE: f64 = -25.0;
pub const MAX_ANGLE: f64 = 90.0;

// Pipes
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_GAP: u32 = 150;
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_INSET: f64 = 4.0; // total per axis, 2px each side
pub const GAP_MARGIN: u32 = 120;
pub const SPAWN_INTERVAL_MS: u64 = 1500;
pub const SPAWN_OFFSET: f64 = 20.0;
pub const OFFSCREEN_MARGIN: f64 = 10.0;

/// Upper bound on spawn signals delivered for one frame after a stall.
pub const MAX_SPAWNS_PER_FRAME: u32 = 2;

/// Clamp for a single frame's elapsed time before it reaches the spawn timer.
pub const MAX_FRAME_MS: u64 = 250;

// Files under the data directory
pub const DATA_DIR_NAME: &str = ".flapper";
pub const SCORE_FILE_NAME: &str = "score.txt";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flapper.log";
