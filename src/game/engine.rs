use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use super::{
    config::GameConfig,
    food::Food,
    state::{GameState, Snake},
};

/// What happened during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickInfo {
    /// Whether the head landed on the food this tick
    pub ate_food: bool,
    /// Target length the snake had when it bit itself and was reset
    pub reset_from_length: Option<usize>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state: one segment in the centre heading right, food somewhere random
    pub fn new_game(&mut self) -> GameState {
        let board = self.config.board;
        let snake = Snake::new(&board);
        let food = Food::new(&board, &mut self.rng);

        GameState::new(snake, food, board)
    }

    /// Advance the game by one tick.
    ///
    /// Order matters: turn, move, eat, then bite. A reset leaves the food
    /// where it is.
    pub fn tick(&mut self, state: &mut GameState) -> TickInfo {
        let board = state.board;
        let snake = &mut state.snake;

        snake.update_direction();
        snake.move_snake(&board);

        let ate_food = snake.head() == state.food.position;
        if ate_food {
            snake.grow();
            state.food.randomize_position(&board, &mut self.rng);
            debug!(
                length = snake.length,
                food_x = state.food.position.x,
                food_y = state.food.position.y,
                "food eaten"
            );
        }

        let mut reset_from_length = None;
        if snake.check_self_collision() {
            info!(length = snake.length, "self collision, resetting snake");
            reset_from_length = Some(snake.length);
            snake.reset(&board);
        }

        state.ticks += 1;

        TickInfo {
            ate_food,
            reset_from_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};

    fn engine() -> GameEngine {
        GameEngine::with_seed(GameConfig::default(), 1234)
    }

    /// Park the food somewhere the test snake never visits
    fn park_food(state: &mut GameState) {
        state.food = Food::at(Position::new(0, 0));
    }

    #[test]
    fn test_new_game() {
        let mut engine = engine();
        let state = engine.new_game();

        assert_eq!(state.ticks, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(320, 240));
        assert!(state.food.position.is_aligned(&state.board));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        let mut state = engine.new_game();
        park_food(&mut state);

        let info = engine.tick(&mut state);

        assert!(!info.ate_food);
        assert_eq!(info.reset_from_length, None);
        assert_eq!(state.ticks, 1);
        assert_eq!(state.snake.head(), Position::new(340, 240));
    }

    #[test]
    fn test_turn_applies_on_same_tick() {
        let mut engine = engine();
        let mut state = engine.new_game();
        park_food(&mut state);

        state.snake.request_direction(Direction::Up);
        engine.tick(&mut state);

        assert_eq!(state.snake.head(), Position::new(320, 220));
        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.snake.pending_direction, None);
    }

    #[test]
    fn test_wraparound_round_trip() {
        let mut engine = engine();
        let mut state = engine.new_game();
        park_food(&mut state);
        let start = state.snake.head();

        for _ in 0..state.board.cols() {
            engine.tick(&mut state);
            assert!(state.snake.head().is_in_bounds(&state.board));
        }

        assert_eq!(state.snake.head(), start);
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = engine();
        let mut state = engine.new_game();

        let target = state.snake.head().stepped(Direction::Right, &state.board);
        state.food = Food::at(target);

        let info = engine.tick(&mut state);

        assert!(info.ate_food);
        assert_eq!(state.snake.length, 2);
        // Growth shows up on the next move, not immediately
        assert_eq!(state.snake.len(), 1);
        assert!(state.food.position.is_aligned(&state.board));
        assert!(state.food.position.is_in_bounds(&state.board));

        park_food(&mut state);
        engine.tick(&mut state);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_self_collision_resets() {
        let mut engine = engine();
        let mut state = engine.new_game();
        park_food(&mut state);

        state.snake.length = 5;
        for _ in 0..4 {
            engine.tick(&mut state);
        }
        // Body: (400,240) (380,240) (360,240) (340,240) (320,240)
        assert_eq!(state.snake.len(), 5);

        state.snake.request_direction(Direction::Down);
        engine.tick(&mut state);
        state.snake.request_direction(Direction::Left);
        engine.tick(&mut state);
        state.snake.request_direction(Direction::Up);
        let info = engine.tick(&mut state);

        assert_eq!(info.reset_from_length, Some(5));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.length, 1);
        assert_eq!(state.snake.head(), Position::new(320, 240));
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.pending_direction, None);
        assert_eq!(state.food.position, Position::new(0, 0));
    }

    #[test]
    fn test_collision_with_surviving_segment() {
        let mut engine = engine();
        let mut state = engine.new_game();
        park_food(&mut state);

        // Turning up runs the head into a segment the tail pop leaves behind
        state.snake.body = vec![
            Position::new(100, 100),
            Position::new(120, 100),
            Position::new(120, 80),
            Position::new(100, 80),
            Position::new(80, 80),
        ];
        state.snake.length = 5;
        state.snake.direction = Direction::Left;
        state.snake.request_direction(Direction::Up);

        let info = engine.tick(&mut state);

        assert_eq!(info.reset_from_length, Some(5));
        assert_eq!(state.snake, Snake::new(&state.board));
    }

    #[test]
    fn test_tail_vacates_before_collision_check() {
        let mut engine = engine();
        let mut state = engine.new_game();
        park_food(&mut state);

        // A tight 2x2 loop of four segments chases its own tail safely
        state.snake.length = 4;
        for _ in 0..3 {
            engine.tick(&mut state);
        }
        for turn in [Direction::Down, Direction::Left, Direction::Up, Direction::Right] {
            state.snake.request_direction(turn);
            let info = engine.tick(&mut state);
            assert_eq!(info.reset_from_length, None);
        }
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_reversal_ignored_by_tick() {
        let mut engine = engine();
        let mut state = engine.new_game();
        park_food(&mut state);

        state.snake.request_direction(Direction::Left);
        engine.tick(&mut state);

        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), Position::new(340, 240));
    }
}
