// ABOUTME: Page rendering module for pagegen
// ABOUTME: Walks the template directory and writes one static page per template

pub mod error;
pub mod renderer;
pub mod settings;

pub use error::{RenderError, Result};
pub use renderer::{RenderSummary, RenderedPage, Renderer, COMPLETION_MESSAGE};
pub use settings::RenderSettings;
