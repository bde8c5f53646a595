//! Pipe obstacles: a top and a bottom segment around a fixed gap.

use super::config::GameConfig;
use super::geometry::Rect;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    pub width: f64,
    /// Vertical midpoint of the opening. Fixed for the pipe's lifetime.
    pub gap_center: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub passed: bool,

    half_gap: f64,
    floor_y: f64,
    inset: f64,
    offscreen_margin: f64,
}

impl Pipe {
    pub fn new(x: f64, gap_center: f64, config: &GameConfig) -> Self {
        Self {
            x,
            width: config.pipe_width,
            gap_center,
            passed: false,
            half_gap: config.half_gap(),
            floor_y: config.floor_y(),
            inset: config.pipe_inset,
            offscreen_margin: config.offscreen_margin,
        }
    }

    /// New pipe at `x` with a gap-center drawn uniformly from the
    /// configured range (inclusive on both ends).
    pub fn spawn<R: Rng>(x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let gap_center = rng.gen_range(config.gap_center_range());
        Self::new(x, gap_center as f64, config)
    }

    pub fn tick(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// Right edge; the bird has passed the pipe once this is left of it.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < -self.offscreen_margin
    }

    pub fn gap_top(&self) -> f64 {
        self.gap_center - self.half_gap
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_center + self.half_gap
    }

    /// Solid segments above and below the gap, before the collision inset.
    pub fn segments(&self) -> [Rect; 2] {
        let top = Rect::new(self.x, 0.0, self.width, self.gap_top());
        let bottom = Rect::new(
            self.x,
            self.gap_bottom(),
            self.width,
            self.floor_y - self.gap_bottom(),
        );
        [top, bottom]
    }

    /// Segments shrunk on every side, as used for collision tests.
    pub fn collision_rects(&self) -> [Rect; 2] {
        self.segments().map(|r| r.inflate(-self.inset, -self.inset))
    }

    pub fn collides_with(&self, hitbox: &Rect) -> bool {
        self.collision_rects().iter().any(|r| r.intersects(hitbox))
    }
}
