//! Python's Bend - a grid snake game for the terminal
//!
//! This library provides:
//! - Core game logic with no terminal dependencies (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
