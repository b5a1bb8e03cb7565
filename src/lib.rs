// ABOUTME: Main library module for pagegen, a static page renderer
// ABOUTME: Exports the template engine, the rendering pass and the CLI driver

pub mod cli;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use render::{RenderError, RenderSettings, RenderSummary, Renderer};
pub use template::{HandlebarsEngine, RenderContext, TemplateEngine, TemplateError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
