//! Collision detection for the breakout field
//!
//! Everything is an axis-aligned box test: the ball is treated as its
//! bounding square for every rectangle check. This is a deliberate
//! simplification, not an approximation to tighten later.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Brick, Paddle};
use crate::settings::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Inclusive overlap test; boxes sharing an edge count as intersecting
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// One collision category, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Left or right wall: flip horizontal velocity
    SideWall,
    /// Top wall: flip vertical velocity
    Ceiling,
    /// Paddle face: flip vertical velocity, plus the bounce-angle rule
    Paddle,
    /// Past the paddle line: game over
    Floor,
    /// Brick by id: remove it, flip vertical velocity
    Brick(u32),
}

/// Find the first matching collision for the ball's current position.
///
/// Categories are checked in a fixed priority order and only the first match
/// is reported, so a tick where the ball overlaps both the paddle and a wall
/// resolves the wall alone. Likewise at most one brick is reported per tick
/// even when the ball's bounding square overlaps two; the survivor is caught
/// on a later tick.
pub fn detect_collision(
    ball: &Ball,
    paddle: &Paddle,
    bricks: &[Brick],
    config: &Config,
) -> Option<Collision> {
    let diameter = ball.radius * 2.0;

    if ball.pos.x >= config.field_width - diameter || ball.pos.x <= ball.radius {
        Some(Collision::SideWall)
    } else if ball.pos.y <= ball.radius {
        Some(Collision::Ceiling)
    } else if paddle.bounds().intersects(&ball.bounds()) {
        Some(Collision::Paddle)
    } else if ball.pos.y > paddle.y + ball.radius {
        Some(Collision::Floor)
    } else {
        let bounds = ball.bounds();
        bricks
            .iter()
            .find(|brick| brick.rect.intersects(&bounds))
            .map(|brick| Collision::Brick(brick.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    fn running_state() -> (GameState, Config) {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.start_session(&config);
        (state, config)
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        let c = Aabb::new(20.0, 0.0, 5.0, 5.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));

        // Shared edge counts
        let d = Aabb::new(10.0, 0.0, 5.0, 5.0);
        assert!(a.intersects(&d));
    }

    #[test]
    fn test_open_field_is_collision_free() {
        let (state, config) = running_state();
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            None
        );
    }

    #[test]
    fn test_side_wall_thresholds() {
        let (mut state, config) = running_state();

        // Right wall: x at field_width - diameter
        state.ball.pos = Vec2::new(config.field_width - 20.0, 300.0);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            Some(Collision::SideWall)
        );

        // Left wall: x at the radius margin
        state.ball.pos = Vec2::new(10.0, 300.0);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            Some(Collision::SideWall)
        );

        // Just inside either margin: free
        state.ball.pos = Vec2::new(10.5, 300.0);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            None
        );
    }

    #[test]
    fn test_ceiling_threshold() {
        let (mut state, config) = running_state();

        state.ball.pos = Vec2::new(500.0, 10.0);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            Some(Collision::Ceiling)
        );

        state.ball.pos = Vec2::new(500.0, 10.5);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            None
        );
    }

    #[test]
    fn test_side_wall_beats_ceiling_in_corner() {
        let (mut state, config) = running_state();

        state.ball.pos = Vec2::new(5.0, 5.0);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            Some(Collision::SideWall)
        );
    }

    #[test]
    fn test_paddle_overlap() {
        let (mut state, config) = running_state();

        // Bounding square touches the paddle's top edge
        state.ball.pos = Vec2::new(state.paddle.mid_x(), state.paddle.y - 10.0);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            Some(Collision::Paddle)
        );

        // Same height but beside the paddle: floor check doesn't fire yet
        // (ball center still above paddle_y + radius)
        state.ball.pos = Vec2::new(100.0, state.paddle.y - 10.0);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            None
        );
    }

    #[test]
    fn test_floor_threshold() {
        let (mut state, config) = running_state();

        // Past the paddle line, outside the paddle's x span
        state.ball.pos = Vec2::new(100.0, state.paddle.y + 10.5);
        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            Some(Collision::Floor)
        );
    }

    #[test]
    fn test_brick_hit_reports_first_id() {
        let (mut state, config) = running_state();

        // Dead center of brick 0
        let target = state.bricks[0].rect;
        state.ball.pos = (target.min + target.max) / 2.0;

        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            Some(Collision::Brick(0))
        );
    }

    #[test]
    fn test_brick_overlap_of_two_reports_one() {
        let (mut state, config) = running_state();

        // On the seam between bricks 0 and 1: bounding square overlaps both
        state.ball.pos = Vec2::new(state.bricks[1].rect.min.x, 60.0);

        assert_eq!(
            detect_collision(&state.ball, &state.paddle, &state.bricks, &config),
            Some(Collision::Brick(0))
        );
    }
}
