use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::geometry::BoardGeometry;

/// Default number of game ticks per second
pub const DEFAULT_TICK_RATE: u32 = 20;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pixel dimensions of the board and its cells
    pub board: BoardGeometry,
    /// Game ticks per second
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardGeometry::default(),
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

impl GameConfig {
    /// Create a configuration on the default board with a custom tick rate
    pub fn with_tick_rate(tick_rate: u32) -> Self {
        Self {
            tick_rate,
            ..Default::default()
        }
    }

    /// Time budget of a single tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if the board divides evenly into cells and the tick rate is
    /// usable, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        self.board.validate()?;

        if self.tick_rate == 0 {
            return Err("tick_rate must be at least 1".to_string());
        }

        Ok(())
    }
}
