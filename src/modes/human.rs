use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, WINDOW_TITLE};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    pub fn with_engine(mut engine: GameEngine) -> Self {
        let state = engine.new_game();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, SetTitle(WINDOW_TITLE))
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = self.engine.config().tick_interval();
        let mut tick_timer = interval(tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            tick_ms = tick_interval.as_millis() as u64,
            cols = self.state.board.cols(),
            rows = self.state.board.rows(),
            "game loop started"
        );

        loop {
            // Input is drained before the tick so turns land on the next move
            tokio::select! {
                biased;

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }

                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, then present the frame
                _ = tick_timer.tick() => {
                    self.update_game();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            ticks = self.state.ticks,
            best_length = self.metrics.best_length,
            resets = self.metrics.resets,
            "quit requested"
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    self.state.snake.request_direction(direction);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let info = self.engine.tick(&mut self.state);
        self.metrics.on_tick(&info, self.state.snake.length);
        self.metrics.update();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Food, Position};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode() -> HumanMode {
        let engine = GameEngine::with_seed(GameConfig::default(), 9);
        let mut mode = HumanMode::with_engine(engine);
        mode.state.food = Food::at(Position::new(0, 0));
        mode
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.state.snake.len(), 1);
        assert_eq!(mode.state.ticks, 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_last_key_before_tick_wins() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Up));
        mode.handle_event(key(KeyCode::Down));
        mode.update_game();

        assert_eq!(mode.state.snake.direction, Direction::Down);
        assert_eq!(mode.state.snake.head(), Position::new(320, 260));
    }

    #[test]
    fn test_reverse_key_is_dropped() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Left));
        mode.update_game();

        assert_eq!(mode.state.snake.direction, Direction::Right);
        assert_eq!(mode.state.snake.head(), Position::new(340, 240));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut mode = mode();
        let release =
            KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        mode.handle_event(Event::Key(release));

        assert_eq!(mode.state.snake.pending_direction, None);
    }

    #[test]
    fn test_quit_key_sets_flag() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Esc));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_non_key_events_ignored() {
        let mut mode = mode();
        mode.handle_event(Event::FocusLost);
        mode.handle_event(Event::Resize(100, 40));

        assert!(!mode.should_quit);
        assert_eq!(mode.state.snake.pending_direction, None);
    }

    #[test]
    fn test_update_tracks_metrics() {
        let mut mode = mode();
        mode.state.food = Food::at(Position::new(340, 240));
        mode.update_game();

        assert_eq!(mode.metrics.food_eaten, 1);
        assert_eq!(mode.metrics.best_length, 2);
        assert_eq!(mode.state.ticks, 1);
    }
}
