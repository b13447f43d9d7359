pub mod renderer;

pub use renderer::{Renderer, food_color, status_title};
