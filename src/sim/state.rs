//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::settings::Config;

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Entities laid out, clock not started
    NotStarted,
    /// Active gameplay
    Running,
    /// Ball reached the floor
    GameOver,
    /// Session ended by the user (quit key, window close)
    Stopped,
}

/// The ball
///
/// Velocity magnitude stays constant for a whole session; collisions only
/// flip component signs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    fn new(config: &Config) -> Self {
        Self {
            // Centered horizontally, 100 units above field center
            pos: Vec2::new(
                config.field_width / 2.0,
                config.field_height / 2.0 - 100.0,
            ),
            vel: Vec2::splat(config.ball_speed),
            radius: config.ball_radius,
        }
    }

    /// Bounding square used for all rectangle tests. The ball collides as if
    /// it were this square, not a true circle.
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// The player's paddle
///
/// Only `x` ever changes; `y` and the dimensions are fixed at session start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// X of the left edge
    pub x: f32,
    /// Y of the top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    fn new(config: &Config) -> Self {
        Self {
            x: (config.field_width - config.paddle_width) / 2.0,
            y: config.paddle_y,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    /// Horizontal midpoint, the pivot for the bounce-angle rule
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Creation-order id, stable for the whole session
    pub id: u32,
    pub rect: Aabb,
}

/// Complete game state (deterministic, serializable)
///
/// Owned by exactly one thread; the front-end reads snapshots and feeds
/// inputs back through `move_paddle` / `tick`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: SessionPhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Bricks in creation order; removal is the only mutation after layout
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Lay out a fresh session in the `NotStarted` phase
    pub fn new(config: &Config) -> Self {
        Self {
            phase: SessionPhase::NotStarted,
            ball: Ball::new(config),
            paddle: Paddle::new(config),
            bricks: layout_bricks(config),
        }
    }

    /// (Re)start the session: rebuild all entities at their creation-time
    /// layout and begin running
    pub fn start_session(&mut self, config: &Config) {
        *self = Self::new(config);
        self.phase = SessionPhase::Running;
        log::info!(
            "Session started: {} bricks, ball at {}",
            self.bricks.len(),
            self.ball.pos
        );
    }

    /// Stop before the next tick (quit key, window close)
    pub fn stop_session(&mut self) {
        if self.phase == SessionPhase::Running {
            self.phase = SessionPhase::Stopped;
            log::info!("Session stopped by user");
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }
}

/// Build the brick grid: `brick_levels` rows of `brick_columns()` whole
/// bricks, left-to-right then top-to-bottom, starting at
/// `(brick_padding, brick_top)`.
fn layout_bricks(config: &Config) -> Vec<Brick> {
    let columns = config.brick_columns();
    let mut bricks = Vec::with_capacity((columns * config.brick_levels) as usize);
    let mut id = 0;

    for row in 0..config.brick_levels {
        let y = config.brick_top + row as f32 * config.brick_height;
        for column in 0..columns {
            let x = config.brick_padding + column as f32 * config.brick_width;
            bricks.push(Brick {
                id,
                rect: Aabb::new(x, y, config.brick_width, config.brick_height),
            });
            id += 1;
        }
    }

    bricks
}
