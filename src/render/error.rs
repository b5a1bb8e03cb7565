// ABOUTME: Error types for the page rendering pass
// ABOUTME: Every variant is fatal and aborts the remaining templates

use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to list template directory {}: {error}", dir.display())]
    Enumerate {
        dir: PathBuf,
        error: std::io::Error,
    },

    #[error("Failed to render template {name}: {error}")]
    Template { name: String, error: TemplateError },

    #[error("Failed to write {}: {error}", path.display())]
    Write {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Failed to report progress: {0}")]
    Progress(#[from] std::io::Error),
}

impl RenderError {
    /// Name of the template being processed when the run aborted, if any
    pub fn template_name(&self) -> Option<&str> {
        match self {
            RenderError::Template { name, .. } => Some(name),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
