// ABOUTME: Error types for template engine operations
// ABOUTME: Distinguishes missing templates, syntax errors, undefined references and render failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template syntax error in {name}: {message}")]
    Syntax { name: String, message: String },

    #[error("Template '{name}' references undefined template '{reference}'")]
    UndefinedReference { name: String, reference: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Handlebars error: {0}")]
    HandlebarsError(#[from] handlebars::RenderError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
