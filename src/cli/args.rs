// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Every flag is optional; without flags the configured defaults are rendered

use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::render::RenderSettings;

#[derive(Parser, Debug, Default)]
#[command(name = "pagegen")]
#[command(about = "Render a directory of templates into static pages")]
#[command(version)]
pub struct Args {
    #[arg(short, long, help = "Directory containing the templates")]
    pub templates: Option<PathBuf>,

    #[arg(short, long, help = "Directory the rendered pages are written to")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Layout template that is not rendered as a page")]
    pub exclude: Option<String>,

    #[arg(long, help = "Extension given to rendered pages")]
    pub extension: Option<String>,

    #[arg(long = "var", help = "Template variable (key=value), may be repeated")]
    pub vars: Vec<String>,

    #[arg(long, help = "Fail on variables missing from the render context")]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(vars: &[String]) -> anyhow::Result<HashMap<String, String>> {
        let mut variables = HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }

    /// Apply flags given on the command line on top of `settings`
    pub fn apply_to(&self, settings: &mut RenderSettings) {
        if let Some(ref templates) = self.templates {
            settings.template_dir = templates.clone();
        }
        if let Some(ref output) = self.output {
            settings.output_dir = output.clone();
        }
        if let Some(ref exclude) = self.exclude {
            settings.exclude = exclude.clone();
        }
        if let Some(ref extension) = self.extension {
            settings.output_extension = extension.clone();
        }
        if self.strict {
            settings.strict = true;
        }
    }
}
