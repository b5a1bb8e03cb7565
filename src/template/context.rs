// ABOUTME: Render context holding the variables visible to a template
// ABOUTME: Empty by default; converted to JSON before it reaches the engine

use serde::Serialize;
use std::collections::HashMap;

use super::error::{Result, TemplateError};

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context with no variables bound
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(variables: &HashMap<String, String>) -> Self {
        Self {
            variables: variables.clone(),
        }
    }

    /// Add or update a variable
    pub fn set_variable(&mut self, key: String, value: String) {
        self.variables.insert(key, value);
    }

    pub fn get_variable(&self, key: &str) -> Option<&String> {
        self.variables.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(TemplateError::JsonError)
    }
}
