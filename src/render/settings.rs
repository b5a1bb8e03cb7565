// ABOUTME: Settings for a rendering pass and the output naming rule
// ABOUTME: Defaults reproduce the fixed layout: static/templates -> ./<stem>.html, skipping base.html

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::template::engine::file_stem;

pub const DEFAULT_TEMPLATE_DIR: &str = "static/templates";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_EXCLUDE: &str = "base.html";
pub const DEFAULT_OUTPUT_EXTENSION: &str = "html";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    /// File name treated as the layout and never written as a page
    pub exclude: String,
    pub output_extension: String,
    pub strict: bool,
    pub variables: HashMap<String, String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            exclude: DEFAULT_EXCLUDE.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            strict: false,
            variables: HashMap::new(),
        }
    }
}

impl RenderSettings {
    pub fn new(template_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn is_excluded(&self, template_name: &str) -> bool {
        template_name == self.exclude
    }

    /// `<output_dir>/<stem>.<output_extension>`
    pub fn output_path(&self, template_name: &str) -> PathBuf {
        self.output_dir.join(output_file_name(template_name, &self.output_extension))
    }

    pub fn template_path(&self, template_name: &str) -> PathBuf {
        self.template_dir.join(Path::new(template_name))
    }
}

/// Replace the final extension of `template_name` with `extension`.
/// A leading dot on `extension` is optional.
pub fn output_file_name(template_name: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    let stem = file_stem(template_name);
    if extension.is_empty() {
        stem
    } else {
        format!("{}.{}", stem, extension)
    }
}
