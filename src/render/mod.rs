pub mod canvas;
pub mod renderer;

pub use canvas::CellCanvas;
pub use renderer::{Renderer, WINDOW_TITLE};
