use std::time::{Duration, Instant};

use crate::game::TickInfo;

/// Statistics for the current session, kept in memory only
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub food_eaten: u32,
    pub resets: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 1,
            food_eaten: 0,
            resets: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold the outcome of one tick into the totals
    pub fn on_tick(&mut self, info: &TickInfo, current_length: usize) {
        if info.ate_food {
            self.food_eaten += 1;
        }

        if let Some(lost_length) = info.reset_from_length {
            self.resets += 1;
            self.best_length = self.best_length.max(lost_length);
        }

        self.best_length = self.best_length.max(current_length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
