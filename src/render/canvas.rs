use crate::game::{BoardGeometry, Canvas, Position, Rgb};

/// A frame's worth of board cells, one color per cell, row-major
#[derive(Debug, Clone)]
pub struct CellCanvas {
    board: BoardGeometry,
    background: Rgb,
    cells: Vec<Rgb>,
}

impl CellCanvas {
    pub fn new(board: BoardGeometry, background: Rgb) -> Self {
        let len = (board.cols() * board.rows()).max(0) as usize;
        Self {
            board,
            background,
            cells: vec![background; len],
        }
    }

    /// Paint every cell with the background color
    pub fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    pub fn cols(&self) -> usize {
        self.board.cols() as usize
    }

    pub fn rows(&self) -> usize {
        self.board.rows() as usize
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Rgb> {
        if col >= self.cols() || row >= self.rows() {
            return None;
        }
        self.cells.get(row * self.cols() + col).copied()
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Rgb] {
        let cols = self.cols();
        &self.cells[row * cols..(row + 1) * cols]
    }
}

impl Canvas for CellCanvas {
    fn fill_cell(&mut self, position: Position, color: Rgb) {
        if !position.is_in_bounds(&self.board) {
            return;
        }

        let (col, row) = position.cell(&self.board);
        let index = row as usize * self.cols() + col as usize;
        self.cells[index] = color;
    }
}
