//! The player-controlled bird.

use super::config::GameConfig;
use super::constants::{ANGLE_PER_VELOCITY, MAX_ANGLE, MIN_ANGLE};
use super::geometry::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed horizontal position (center).
    pub x: f64,
    /// Vertical position of the center. Row 0 = top of the screen.
    pub y: f64,
    /// Vertical velocity in px/tick (positive = downward).
    pub velocity: f64,
    pub radius: f64,

    /// Presentation tilt in degrees, recomputed every tick.
    angle: f64,

    // Cached parameters
    gravity: f64,
    flap_impulse: f64,
    width: f64,
    height: f64,
    hitbox_shrink: f64,
}

impl Bird {
    /// A bird at the start position: horizontally at `bird_x`, vertically
    /// centered on the screen, at rest.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: (config.screen_height / 2) as f64,
            velocity: 0.0,
            angle: 0.0,
            radius: config.bird_radius,
            gravity: config.gravity,
            flap_impulse: config.flap_impulse,
            width: config.bird_width,
            height: config.bird_height,
            hitbox_shrink: config.hitbox_shrink,
        }
    }

    /// Set velocity to the flap impulse. Overrides any accumulated fall speed.
    pub fn flap(&mut self) {
        self.velocity = self.flap_impulse;
    }

    /// One step of gravity integration.
    pub fn tick(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
        self.angle = (-self.velocity * ANGLE_PER_VELOCITY).clamp(MIN_ANGLE, MAX_ANGLE);
    }

    /// Tilt in degrees (positive = nose up), derived from the velocity at
    /// the last tick. Presentation only.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Sprite box centered on the bird.
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.x, self.y, self.width, self.height)
    }

    /// Collision box: the sprite box shrunk on every side.
    pub fn hitbox(&self) -> Rect {
        self.bounds().inflate(-self.hitbox_shrink, -self.hitbox_shrink)
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird() -> Bird {
        Bird::new(&GameConfig::default())
    }

    #[test]
    fn test_start_position() {
        let b = bird();
        assert_eq!(b.x, 80.0);
        assert_eq!(b.y, 325.0);
        assert_eq!(b.velocity, 0.0);
        assert_eq!(b.angle(), 0.0);
    }

    #[test]
    fn test_flap_from_rest() {
        let mut b = bird();
        b.flap();
        assert_eq!(b.velocity, -8.5);
    }

    #[test]
    fn test_flap_overrides_fall_speed() {
        let mut b = bird();
        b.velocity = 12.0;
        b.flap();
        assert_eq!(b.velocity, -8.5);
    }

    #[test]
    fn test_gravity_accumulates_each_tick() {
        let mut b = bird();
        let mut last = b.velocity;
        for _ in 0..20 {
            b.tick();
            assert!((b.velocity - last - 0.45).abs() < 1e-9);
            last = b.velocity;
        }
    }

    #[test]
    fn test_tick_moves_by_new_velocity() {
        let mut b = bird();
        b.tick();
        assert!((b.y - 325.45).abs() < 1e-9);
    }

    #[test]
    fn test_angle_clamped() {
        let mut b = bird();
        b.flap();
        b.tick();
        // -(-8.05) * 3 = 24.15
        assert!((b.angle() - 24.15).abs() < 1e-9);

        b.velocity = -40.0;
        b.tick();
        assert_eq!(b.angle(), 90.0);

        b.velocity = 20.0;
        b.tick();
        assert_eq!(b.angle(), -25.0);
    }

    #[test]
    fn test_hitbox_inset_three_px_each_side() {
        let b = bird();
        let sprite = b.bounds();
        let hit = b.hitbox();
        assert_eq!(hit.left() - sprite.left(), 3.0);
        assert_eq!(sprite.right() - hit.right(), 3.0);
        assert_eq!(hit.top() - sprite.top(), 3.0);
        assert_eq!(sprite.bottom() - hit.bottom(), 3.0);
        assert_eq!(hit.w, 39.0);
        assert_eq!(hit.h, 34.0);
    }
}
