//! Tunable game parameters.
//!
//! Everything the simulation treats as a constant lives in [`GameConfig`].
//! The binary builds one at startup (defaults, optionally overridden by a
//! JSON file) and it is never modified afterwards.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::ops::RangeInclusive;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Simulation ticks (and rendered frames) per second.
    pub tick_rate: u32,
    pub gravity: f64,
    /// Velocity assigned on flap (negative = upward).
    pub flap_impulse: f64,
    pub pipe_speed: f64,
    /// Vertical size of the opening between the two pipe segments.
    pub pipe_gap: u32,
    pub pipe_width: f64,
    pub pipe_inset: f64,
    /// Minimum distance of a gap-center from the top and from the ground.
    pub gap_margin: u32,
    pub spawn_interval_ms: u64,
    pub spawn_offset: f64,
    pub offscreen_margin: f64,
    pub ground_height: u32,
    pub bird_x: f64,
    pub bird_radius: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub hitbox_shrink: f64,
    /// Ring the terminal bell on crash.
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            pipe_inset: PIPE_INSET,
            gap_margin: GAP_MARGIN,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_offset: SPAWN_OFFSET,
            offscreen_margin: OFFSCREEN_MARGIN,
            ground_height: GROUND_HEIGHT,
            bird_x: BIRD_X,
            bird_radius: BIRD_RADIUS,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            hitbox_shrink: HITBOX_SHRINK,
            sound: true,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the ground surface.
    pub fn floor_y(&self) -> f64 {
        self.screen_height as f64 - self.ground_height as f64
    }

    /// Inclusive range a new pipe's gap-center is drawn from.
    pub fn gap_center_range(&self) -> RangeInclusive<u32> {
        let low = self.gap_margin;
        let high = self
            .screen_height
            .saturating_sub(self.ground_height)
            .saturating_sub(self.gap_margin);
        low..=high
    }

    /// Half of the gap height, rounded down like the integer pipe layout.
    pub fn half_gap(&self) -> f64 {
        (self.pipe_gap / 2) as f64
    }

    /// X position of a freshly spawned pipe.
    pub fn spawn_x(&self) -> f64 {
        self.screen_width as f64 + self.spawn_offset
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.tick_rate.max(1) as u64)
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Check that the parameters describe a playable field.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: String| Err(io::Error::new(io::ErrorKind::InvalidInput, msg));

        if self.screen_width == 0 || self.screen_height == 0 {
            return invalid("screen dimensions must be positive".to_string());
        }
        if self.tick_rate == 0 {
            return invalid("tick_rate must be positive".to_string());
        }
        if self.spawn_interval_ms == 0 {
            return invalid("spawn_interval_ms must be positive".to_string());
        }
        if self.ground_height >= self.screen_height {
            return invalid(format!(
                "ground_height {} leaves no sky on a {}px screen",
                self.ground_height, self.screen_height
            ));
        }
        if self.pipe_width <= 0.0 || self.bird_width <= 0.0 || self.bird_height <= 0.0 {
            return invalid("pipe and bird sizes must be positive".to_string());
        }
        if self.pipe_speed <= 0.0 {
            return invalid(format!("pipe_speed {} must be positive", self.pipe_speed));
        }
        if self.pipe_inset < 0.0 || self.hitbox_shrink < 0.0 || self.offscreen_margin < 0.0 {
            return invalid(
                "pipe_inset, hitbox_shrink and offscreen_margin must not be negative".to_string(),
            );
        }
        if self.hitbox_shrink >= self.bird_width.min(self.bird_height) {
            return invalid(format!(
                "hitbox_shrink {} leaves no hitbox on a {}x{} bird",
                self.hitbox_shrink, self.bird_width, self.bird_height
            ));
        }
        if self.bird_radius <= 0.0 || self.bird_radius * 2.0 >= self.floor_y() {
            return invalid(format!("bird_radius {} does not fit", self.bird_radius));
        }
        let floor = self.screen_height - self.ground_height;
        if self.gap_margin.saturating_mul(2) > floor {
            return invalid(format!(
                "gap_margin {} leaves no room for a gap above the {}px ground line",
                self.gap_margin, floor
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.floor_y(), 550.0);
        assert_eq!(config.gap_center_range(), 120..=430);
        assert_eq!(config.spawn_x(), 520.0);
        assert_eq!(config.half_gap(), 75.0);
    }

    #[test]
    fn test_tick_interval_from_rate() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_micros(16_666));
        assert_eq!(config.spawn_interval(), Duration::from_millis(1500));
    }

    #[test]
    fn test_rejects_empty_gap_range() {
        let config = GameConfig {
            gap_margin: 300,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_rejects_zero_rates() {
        let config = GameConfig {
            tick_rate: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            spawn_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_stationary_pipes() {
        for speed in [0.0, -3.0] {
            let config = GameConfig {
                pipe_speed: speed,
                ..GameConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_rejects_negative_insets() {
        let configs = [
            GameConfig {
                pipe_inset: -1.0,
                ..GameConfig::default()
            },
            GameConfig {
                hitbox_shrink: -1.0,
                ..GameConfig::default()
            },
            GameConfig {
                offscreen_margin: -1.0,
                ..GameConfig::default()
            },
        ];
        for config in configs {
            let err = config.validate().unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_rejects_hitbox_shrunk_away() {
        // Default bird is 45x40: shrinking by 40 leaves zero height.
        let config = GameConfig {
            hitbox_shrink: 40.0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let config = GameConfig {
            hitbox_shrink: 39.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_ground_taller_than_screen() {
        let config = GameConfig {
            ground_height: 650,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "gravity": 0.3, "sound": false }"#).unwrap();
        assert_eq!(config.gravity, 0.3);
        assert!(!config.sound);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.flap_impulse, FLAP_IMPULSE);
    }
}
