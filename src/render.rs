//! Terminal field renderer
//!
//! A character grid scaled to the playfield. The sim knows nothing about
//! this; the view just reads state snapshots after each tick.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;

use crate::settings::Config;
use crate::sim::GameState;

const BRICK_CHAR: char = '#';
const PADDLE_CHAR: char = '=';
const BALL_CHAR: char = 'o';

/// Character-grid view of the playfield
pub struct FieldView {
    grid: Vec<Vec<char>>,
    width: u16,
    height: u16,
    scale_x: f32,
    scale_y: f32,
}

impl FieldView {
    pub fn new(width: u16, height: u16, config: &Config) -> Self {
        let width = width.max(20);
        let height = height.max(10);
        FieldView {
            grid: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            scale_x: width as f32 / config.field_width,
            scale_y: height as f32 / config.field_height,
        }
    }

    /// Map field coordinates to a grid cell, clamped to the grid
    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let cx = (x * self.scale_x).round() as i32;
        let cy = (y * self.scale_y).round() as i32;
        (
            cx.clamp(0, self.width as i32 - 1) as u16,
            cy.clamp(0, self.height as i32 - 1) as u16,
        )
    }

    fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.grid[y as usize][x as usize] = c;
        }
    }

    /// Redraw the grid from a state snapshot
    pub fn draw(&mut self, state: &GameState) {
        for row in &mut self.grid {
            row.fill(' ');
        }

        for brick in &state.bricks {
            let (x0, y) = self.cell(brick.rect.min.x, brick.rect.min.y);
            let (x1, _) = self.cell(brick.rect.max.x, brick.rect.min.y);
            // Half-open span leaves a one-cell gap between neighbors
            for x in x0..x1 {
                self.set_char(x, y, BRICK_CHAR);
            }
        }

        let (px0, py) = self.cell(state.paddle.x, state.paddle.y);
        let (px1, _) = self.cell(state.paddle.x + state.paddle.width, state.paddle.y);
        for x in px0..=px1 {
            self.set_char(x, py, PADDLE_CHAR);
        }

        let (bx, by) = self.cell(state.ball.pos.x, state.ball.pos.y);
        self.set_char(bx, by, BALL_CHAR);
    }

    /// Write the grid to the terminal, one row per line
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for y in 0..self.height {
            execute!(out, MoveTo(0, y))?;
            write!(out, "{}", self.grid[y as usize].iter().collect::<String>())?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(view: &FieldView, c: char) -> usize {
        view.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == c)
            .count()
    }

    #[test]
    fn test_draw_places_every_entity() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.start_session(&config);

        let mut view = FieldView::new(80, 24, &config);
        view.draw(&state);

        assert_eq!(count(&view, BALL_CHAR), 1);
        assert!(count(&view, PADDLE_CHAR) >= 2);
        assert!(count(&view, BRICK_CHAR) > 21);
    }

    #[test]
    fn test_cell_clamps_to_grid() {
        let config = Config::default();
        let view = FieldView::new(80, 24, &config);

        assert_eq!(view.cell(-50.0, -50.0), (0, 0));
        assert_eq!(view.cell(9999.0, 9999.0), (79, 23));
    }
}
