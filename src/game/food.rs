//! Food entity - respawns on a random cell whenever it is eaten

use rand::Rng;

use super::drawable::{Canvas, Drawable, Rgb, FOOD_COLOR};
use super::geometry::BoardGeometry;
use super::state::Position;

/// A food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    /// Top-left corner of the occupied cell
    pub position: Position,
    pub color: Rgb,
}

impl Food {
    /// Create food on a random cell
    pub fn new<R: Rng + ?Sized>(board: &BoardGeometry, rng: &mut R) -> Self {
        let mut food = Self::at(Position::new(0, 0));
        food.randomize_position(board, rng);
        food
    }

    /// Create food at a specific position
    pub fn at(position: Position) -> Self {
        Self {
            position,
            color: FOOD_COLOR,
        }
    }

    /// Move to a uniformly random cell.
    ///
    /// Cells covered by the snake are not excluded.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, board: &BoardGeometry, rng: &mut R) {
        self.position = Position::new(
            rng.gen_range(0..board.cols()) * board.cell_px,
            rng.gen_range(0..board.rows()) * board.cell_px,
        );
    }
}

impl Drawable for Food {
    fn position(&self) -> Position {
        self.position
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_cell(self.position, self.color);
    }
}
