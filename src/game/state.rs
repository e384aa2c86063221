use super::direction::Direction;
use super::drawable::{Canvas, Drawable, Rgb, SNAKE_COLOR};
use super::food::Food;
use super::geometry::BoardGeometry;

/// A pixel position on the board, always a multiple of the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One cell further in `direction`, wrapped around the board edges
    pub fn stepped(&self, direction: Direction, board: &BoardGeometry) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: board.wrap(self.x + dx * board.cell_px, board.width_px),
            y: board.wrap(self.y + dy * board.cell_px, board.height_px),
        }
    }

    /// Column and row of the cell this position anchors
    pub fn cell(&self, board: &BoardGeometry) -> (i32, i32) {
        (board.to_cell(self.x), board.to_cell(self.y))
    }

    pub fn is_aligned(&self, board: &BoardGeometry) -> bool {
        self.x % board.cell_px == 0 && self.y % board.cell_px == 0
    }

    pub fn is_in_bounds(&self, board: &BoardGeometry) -> bool {
        (0..board.width_px).contains(&self.x) && (0..board.height_px).contains(&self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Target number of segments; the body catches up one tick at a time
    pub length: usize,
    /// Direction applied on the next move
    pub direction: Direction,
    /// Turn requested since the last tick, if any
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// Create a single-segment snake in the centre cell heading right
    pub fn new(board: &BoardGeometry) -> Self {
        Self {
            body: vec![Self::start_position(board)],
            length: 1,
            direction: Direction::Right,
            pending_direction: None,
        }
    }

    /// Centre cell of the board, snapped to the grid
    pub fn start_position(board: &BoardGeometry) -> Position {
        Position::new(
            board.cols() / 2 * board.cell_px,
            board.rows() / 2 * board.cell_px,
        )
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Buffer a turn for the next tick.
    ///
    /// A turn straight back into the current direction is dropped. Otherwise
    /// it replaces whatever was buffered before. Returns whether the turn
    /// was accepted.
    pub fn request_direction(&mut self, candidate: Direction) -> bool {
        if self.direction.is_opposite(candidate) {
            return false;
        }

        self.pending_direction = Some(candidate);
        true
    }

    /// Apply the buffered turn, if any
    pub fn update_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Advance one cell, dropping the tail once the body exceeds `length`
    pub fn move_snake(&mut self, board: &BoardGeometry) {
        let new_head = self.head().stepped(self.direction, board);
        self.body.insert(0, new_head);

        if self.body.len() > self.length {
            self.body.pop();
        }
    }

    /// Raise the target length; the body grows on the following moves
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// True if the head overlaps any other segment
    pub fn check_self_collision(&self) -> bool {
        self.body_segments().contains(&self.head())
    }

    /// Back to a single segment in the centre, heading right
    pub fn reset(&mut self, board: &BoardGeometry) {
        *self = Self::new(board);
    }

    /// Get the number of segments currently on the board
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Drawable for Snake {
    fn position(&self) -> Position {
        self.head()
    }

    fn color(&self) -> Rgb {
        SNAKE_COLOR
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for segment in &self.body {
            canvas.fill_cell(*segment, self.color());
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub board: BoardGeometry,
    pub ticks: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, board: BoardGeometry) -> Self {
        Self {
            snake,
            food,
            board,
            ticks: 0,
        }
    }
}
