use serde::{Deserialize, Serialize};

/// Board width in pixels
pub const BOARD_WIDTH_PX: i32 = 640;
/// Board height in pixels
pub const BOARD_HEIGHT_PX: i32 = 480;
/// Side of one square cell in pixels
pub const CELL_SIZE_PX: i32 = 20;

/// Maps the continuous pixel surface onto a grid of square cells.
///
/// All entity positions are kept in pixels, snapped to multiples of
/// `cell_px` and wrapped into `[0, width_px) x [0, height_px)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub width_px: i32,
    pub height_px: i32,
    pub cell_px: i32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            width_px: BOARD_WIDTH_PX,
            height_px: BOARD_HEIGHT_PX,
            cell_px: CELL_SIZE_PX,
        }
    }
}

impl BoardGeometry {
    pub fn new(width_px: i32, height_px: i32, cell_px: i32) -> Self {
        Self {
            width_px,
            height_px,
            cell_px,
        }
    }

    /// Number of cell columns
    pub fn cols(&self) -> i32 {
        self.width_px / self.cell_px
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.height_px / self.cell_px
    }

    /// Cell index containing the given pixel coordinate
    pub fn to_cell(&self, pixel: i32) -> i32 {
        pixel.div_euclid(self.cell_px)
    }

    /// Folds a coordinate back into `[0, axis_px)`, so leaving one edge
    /// re-enters from the opposite one.
    pub fn wrap(&self, coordinate: i32, axis_px: i32) -> i32 {
        coordinate.rem_euclid(axis_px)
    }

    /// Checks the invariants every other component relies on.
    pub fn validate(&self) -> Result<(), String> {
        if self.cell_px <= 0 {
            return Err(format!("cell size must be positive, got {}", self.cell_px));
        }

        if self.width_px <= 0 || self.height_px <= 0 {
            return Err(format!(
                "board dimensions must be positive, got {}x{}",
                self.width_px, self.height_px
            ));
        }

        if self.width_px % self.cell_px != 0 {
            return Err(format!(
                "board width ({}) is not a multiple of the cell size ({})",
                self.width_px, self.cell_px
            ));
        }

        if self.height_px % self.cell_px != 0 {
            return Err(format!(
                "board height ({}) is not a multiple of the cell size ({})",
                self.height_px, self.cell_px
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let board = BoardGeometry::default();
        assert_eq!(board.cols(), 32);
        assert_eq!(board.rows(), 24);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_to_cell() {
        let board = BoardGeometry::default();
        assert_eq!(board.to_cell(0), 0);
        assert_eq!(board.to_cell(19), 0);
        assert_eq!(board.to_cell(20), 1);
        assert_eq!(board.to_cell(620), 31);
    }

    #[test]
    fn test_wrap() {
        let board = BoardGeometry::default();
        assert_eq!(board.wrap(640, board.width_px), 0);
        assert_eq!(board.wrap(-20, board.width_px), 620);
        assert_eq!(board.wrap(-20, board.height_px), 460);
        assert_eq!(board.wrap(480, board.height_px), 0);
        assert_eq!(board.wrap(300, board.width_px), 300);
    }

    #[test]
    fn test_validation_rejects_uneven_division() {
        assert!(BoardGeometry::new(650, 480, 20).validate().is_err());
        assert!(BoardGeometry::new(640, 490, 20).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_positive() {
        assert!(BoardGeometry::new(640, 480, 0).validate().is_err());
        assert!(BoardGeometry::new(0, 480, 20).validate().is_err());
        assert!(BoardGeometry::new(640, -480, 20).validate().is_err());
    }
}
