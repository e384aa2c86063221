//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Terminal code drives it through [`GameEngine::tick`] and paints entities via [`Drawable`].

pub mod config;
pub mod direction;
pub mod drawable;
pub mod engine;
pub mod food;
pub mod geometry;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use drawable::{Canvas, Drawable, Rgb};
pub use engine::{GameEngine, TickInfo};
pub use food::Food;
pub use geometry::BoardGeometry;
pub use state::{GameState, Position, Snake};
