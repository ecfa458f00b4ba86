//! Gameplay configuration
//!
//! One struct holds every tunable constant, with the canonical values as
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tick interval in milliseconds (drives the front-end clock only;
    /// the sim itself is per-tick and knows nothing about wall time)
    pub tick_interval_ms: u64,

    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Velocity magnitude per axis, in field units per tick
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance moved per key press
    pub paddle_step: f32,
    /// Y of the paddle's top edge
    pub paddle_y: f32,

    // === Brick grid ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_levels: u32,
    pub brick_padding: f32,
    pub brick_top: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            paddle_y: PADDLE_Y,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_levels: BRICK_LEVELS,
            brick_padding: BRICK_PADDING,
            brick_top: BRICK_TOP,
        }
    }
}

impl Config {
    /// Largest legal x for the paddle's left edge
    pub fn paddle_max_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Bricks per row: whole bricks that fit between the side paddings
    pub fn brick_columns(&self) -> u32 {
        ((self.field_width - 2.0 * self.brick_padding) / self.brick_width).floor() as u32
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Bad config file {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}
