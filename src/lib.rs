//! Brick Pong - a breakout/pong hybrid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, game state)
//! - `render`: Terminal field renderer
//! - `settings`: Gameplay configuration with JSON persistence

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Config;

/// Canonical gameplay constants
///
/// `settings::Config` defaults to these; the simulation reads the config, so a
/// config file can override any value without touching code.
pub mod consts {
    /// Fixed simulation tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 100;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 1070.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Velocity magnitude per axis, in field units per tick
    pub const BALL_SPEED: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance the paddle moves per key press
    pub const PADDLE_STEP: f32 = 16.0;
    /// Y of the paddle's top edge (fixed for the whole session)
    pub const PADDLE_Y: f32 = 610.0;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 120.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Number of brick rows
    pub const BRICK_LEVELS: u32 = 3;
    /// Horizontal margin on each side of the brick grid (10% of field width)
    pub const BRICK_PADDING: f32 = FIELD_WIDTH * 0.1;
    /// Y of the first brick row
    pub const BRICK_TOP: f32 = 50.0;
}
