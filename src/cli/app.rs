// ABOUTME: Main application orchestration for the pagegen CLI
// ABOUTME: Coordinates between CLI arguments, configuration, logging and the rendering pass

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Config};
use crate::render::RenderSettings;

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration. Logs go to stderr so stdout
    /// only carries the progress lines.
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Settings for this run: config file values overridden by flags
    pub fn settings(&self, args: &Args) -> RenderSettings {
        let mut settings = self.config.render_settings();
        args.apply_to(&mut settings);
        settings
    }

    /// Run the application with parsed arguments
    pub fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting pagegen v{}", crate::VERSION);
        debug!("Configuration loaded from: {:?}", args.config);

        let variables = Args::parse_variables(&args.vars)?;
        self.config.merge_variables(variables);

        let summary = commands::render_pages(self.settings(&args))?;
        debug!("Render summary: {:?}", summary);
        Ok(())
    }

    /// Create application from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}
