pub mod charts;
pub mod renderer;

pub use renderer::Renderer;
