// ABOUTME: The rendering pass: list templates, skip the layout, render and write each page
// ABOUTME: Runs strictly in directory order and stops at the first error

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::{RenderError, Result};
use super::settings::RenderSettings;
use crate::template::{HandlebarsEngine, RenderContext, TemplateEngine};

pub const COMPLETION_MESSAGE: &str = "Templates rendered successfully.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub template: String,
    pub output: PathBuf,
}

/// What a completed pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Every directory entry seen, in enumeration order
    pub entries: Vec<String>,
    pub rendered: Vec<RenderedPage>,
    pub skipped: Vec<String>,
}

pub struct Renderer<E: TemplateEngine> {
    engine: E,
    settings: RenderSettings,
    entries: Vec<String>,
}

/// Names of the entries directly inside `dir`, in enumeration order
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let enumerate_error = |error| RenderError::Enumerate {
        dir: dir.to_path_buf(),
        error,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(enumerate_error)? {
        let entry = entry.map_err(enumerate_error)?;
        entries.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(entries)
}

impl Renderer<HandlebarsEngine> {
    /// Build a renderer backed by a handlebars engine that indexes the same
    /// directory listing the pass walks.
    pub fn from_settings(settings: RenderSettings) -> Result<Self> {
        let entries = list_entries(&settings.template_dir)?;
        let engine = HandlebarsEngine::from_listing(&settings.template_dir, &entries)
            .with_strict_mode(settings.strict);
        Ok(Self {
            engine,
            settings,
            entries,
        })
    }
}

impl<E: TemplateEngine> Renderer<E> {
    /// Build a renderer around any engine; lists the template directory now
    pub fn with_engine(engine: E, settings: RenderSettings) -> Result<Self> {
        let entries = list_entries(&settings.template_dir)?;
        Ok(Self {
            engine,
            settings,
            entries,
        })
    }

    /// Render every template in the template directory except the excluded one.
    ///
    /// Each entry name is written to `progress` as it is reached, followed by
    /// [`COMPLETION_MESSAGE`] once all entries are done. The first failure
    /// aborts the pass; pages written before it are left in place.
    pub fn run<W: Write>(&self, progress: &mut W) -> Result<RenderSummary> {
        let template_dir = &self.settings.template_dir;
        info!("Rendering templates from {}", template_dir.display());
        let context = RenderContext::new(&self.settings.variables);
        let mut summary = RenderSummary::default();

        for name in &self.entries {
            let name = name.clone();
            writeln!(progress, "{}", name)?;
            summary.entries.push(name.clone());

            if self.settings.is_excluded(&name) {
                debug!("Skipping layout template {}", name);
                summary.skipped.push(name);
                continue;
            }

            debug!(
                "Rendering {}",
                self.settings.template_path(&name).display()
            );
            let rendered = self
                .engine
                .render(&name, &context)
                .map_err(|error| RenderError::Template {
                    name: name.clone(),
                    error,
                })?;

            let output = self.settings.output_path(&name);
            fs::write(&output, &rendered).map_err(|error| RenderError::Write {
                path: output.clone(),
                error,
            })?;
            info!(
                "Rendered {} to {} ({} bytes)",
                name,
                output.display(),
                rendered.len()
            );

            summary.rendered.push(RenderedPage {
                template: name,
                output,
            });
        }

        writeln!(progress, "{}", COMPLETION_MESSAGE)?;
        Ok(summary)
    }
}
