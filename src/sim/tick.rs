//! Fixed timestep simulation tick
//!
//! One call advances the ball by exactly one frame: resolve at most one
//! collision category, then move. The front-end drives this at the configured
//! interval and applies the returned delta to its display.

use glam::Vec2;

use super::collision::{Collision, detect_collision};
use super::state::{GameState, SessionPhase};
use crate::settings::Config;

/// Paddle move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleDir {
    Left,
    Right,
}

/// What one tick changed, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDelta {
    /// Ball center after this tick
    pub ball_pos: Vec2,
    /// Brick destroyed this tick, if any (never more than one)
    pub removed_brick: Option<u32>,
    /// True exactly on the tick that transitions to `GameOver`
    pub game_over: bool,
}

/// Move the paddle one step, check-then-move.
///
/// A step that would land outside `[0, field_width - paddle_width]` is
/// dropped entirely rather than clamped, so near a wall the paddle stops one
/// full step short instead of flush against it.
pub fn move_paddle(state: &mut GameState, dir: PaddleDir, config: &Config) {
    let paddle = &mut state.paddle;
    match dir {
        PaddleDir::Left => {
            let next = paddle.x - config.paddle_step;
            if next >= 0.0 {
                paddle.x = next;
            }
        }
        PaddleDir::Right => {
            let next = paddle.x + config.paddle_step;
            if next <= config.paddle_max_x() {
                paddle.x = next;
            }
        }
    }
}

/// Advance the simulation by one tick.
///
/// No-op unless the session is running. Otherwise: detect the highest
/// priority collision at the current position, resolve it (flip velocity
/// signs, remove a brick, or end the session), then advance the ball
/// unconditionally. The ball still moves on the game-over tick itself; every
/// tick after that leaves the state untouched.
pub fn tick(state: &mut GameState, config: &Config) -> TickDelta {
    if !state.is_running() {
        return TickDelta {
            ball_pos: state.ball.pos,
            removed_brick: None,
            game_over: false,
        };
    }

    let mut removed_brick = None;
    let mut game_over = false;

    match detect_collision(&state.ball, &state.paddle, &state.bricks, config) {
        Some(Collision::SideWall) => {
            state.ball.vel.x = -state.ball.vel.x;
        }
        Some(Collision::Ceiling) => {
            state.ball.vel.y = -state.ball.vel.y;
        }
        Some(Collision::Paddle) => {
            state.ball.vel.y = -state.ball.vel.y;

            // Bounce-angle rule: hitting off-center redirects horizontal
            // travel toward the side struck
            let mid = state.paddle.mid_x();
            if state.ball.pos.x < mid && state.ball.vel.x > 0.0 {
                state.ball.vel.x = -state.ball.vel.x;
            } else if state.ball.pos.x > mid && state.ball.vel.x < 0.0 {
                state.ball.vel.x = -state.ball.vel.x;
            }
        }
        Some(Collision::Floor) => {
            state.phase = SessionPhase::GameOver;
            game_over = true;
            log::info!(
                "Game over: ball at {} with {} bricks left",
                state.ball.pos,
                state.bricks.len()
            );
        }
        Some(Collision::Brick(id)) => {
            state.bricks.retain(|brick| brick.id != id);
            state.ball.vel.y = -state.ball.vel.y;
            removed_brick = Some(id);
            log::debug!("Brick {} destroyed, {} left", id, state.bricks.len());
        }
        None => {}
    }

    state.ball.pos += state.ball.vel;

    TickDelta {
        ball_pos: state.ball.pos,
        removed_brick,
        game_over,
    }
}
