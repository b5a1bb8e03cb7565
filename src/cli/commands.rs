// ABOUTME: Command implementations for the pagegen CLI
// ABOUTME: Runs the rendering pass with progress on stdout

use anyhow::Result;
use std::io;
use tracing::info;

use crate::render::{RenderSettings, RenderSummary, Renderer};

/// Render every page described by `settings`, printing progress to stdout
pub fn render_pages(settings: RenderSettings) -> Result<RenderSummary> {
    info!(
        "Rendering {} -> {} (layout: {})",
        settings.template_dir.display(),
        settings.output_dir.display(),
        settings.exclude
    );

    let renderer = Renderer::from_settings(settings)?;

    let stdout = io::stdout();
    let mut progress = stdout.lock();
    let summary = renderer.run(&mut progress)?;

    info!(
        "Rendered {} pages from {} entries",
        summary.rendered.len(),
        summary.entries.len()
    );
    Ok(summary)
}
