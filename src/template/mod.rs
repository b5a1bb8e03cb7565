// ABOUTME: Template engine module for pagegen
// ABOUTME: Provides the engine capability trait, the handlebars backend and render contexts

pub mod context;
pub mod engine;
pub mod error;
pub mod references;

pub use context::RenderContext;
pub use engine::{HandlebarsEngine, TemplateEngine};
pub use error::{Result, TemplateError};
