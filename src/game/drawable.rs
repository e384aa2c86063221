//! Drawing capability shared by the board entities.
//!
//! Entities know nothing about terminals: they paint grid cells onto a
//! [`Canvas`], and the render layer decides what a filled cell looks like.

use super::state::Position;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND_COLOR: Rgb = Rgb(0, 0, 0);
pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);
pub const FOOD_COLOR: Rgb = Rgb(255, 0, 0);

/// A surface that can fill one `cell_px x cell_px` square at a time
pub trait Canvas {
    /// Fill the cell whose top-left corner is at `position` (in pixels)
    fn fill_cell(&mut self, position: Position, color: Rgb);
}

/// Something with a place on the board and a way to paint itself
pub trait Drawable {
    /// Anchor position; for multi-cell entities this is the leading cell
    fn position(&self) -> Position;

    fn color(&self) -> Rgb;

    fn draw(&self, canvas: &mut dyn Canvas);
}
