pub mod renderer;

pub use renderer::{Renderer, Viewport, nearest_food};
