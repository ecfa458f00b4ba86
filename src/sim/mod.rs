//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one frame of motion)
//! - Stable brick iteration order (by creation id)
//! - Single-owner state, mutated only through `move_paddle` / `tick` /
//!   the session transitions on `GameState`
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Collision, detect_collision};
pub use state::{Ball, Brick, GameState, Paddle, SessionPhase};
pub use tick::{PaddleDir, TickDelta, move_paddle, tick};
