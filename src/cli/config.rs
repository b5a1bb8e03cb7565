// ABOUTME: Configuration management for pagegen
// ABOUTME: Loads the optional YAML config file and merges logging overrides from the environment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::render::RenderSettings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub exclude: Option<String>,

    #[serde(default)]
    pub output_extension: Option<String>,

    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the default locations.
    /// An explicit path must exist; the default locations are optional.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Configuration file not found: {}", p.display());
                }
                Some(p)
            }
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(config_path) => {
                let contents = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read configuration {}", config_path.display())
                })?;
                serde_yaml::from_str(&contents).with_context(|| {
                    format!("Invalid configuration {}", config_path.display())
                })?
            }
            None => Config::default(),
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = [
            PathBuf::from("pagegen.yaml"),
            PathBuf::from("pagegen.yml"),
            PathBuf::from(".pagegen.yaml"),
            PathBuf::from(".pagegen.yml"),
        ];

        if let Some(path) = possible_paths.into_iter().find(|path| path.exists()) {
            return Some(path);
        }

        dirs::home_dir()
            .map(|home_dir| home_dir.join(".pagegen").join("config.yaml"))
            .filter(|home_config| home_config.exists())
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(level) = std::env::var("PAGEGEN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PAGEGEN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Merge additional variables into template variables
    pub fn merge_variables(&mut self, vars: HashMap<String, String>) {
        self.template_vars.extend(vars);
    }

    /// Render settings described by this configuration, defaults filling the gaps
    pub fn render_settings(&self) -> RenderSettings {
        let defaults = RenderSettings::default();
        RenderSettings {
            template_dir: self.template_dir.clone().unwrap_or(defaults.template_dir),
            output_dir: self.output_dir.clone().unwrap_or(defaults.output_dir),
            exclude: self.exclude.clone().unwrap_or(defaults.exclude),
            output_extension: self
                .output_extension
                .clone()
                .unwrap_or(defaults.output_extension),
            strict: self.strict,
            variables: self.template_vars.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_gives_default_settings() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.render_settings(), RenderSettings::default());
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("pagegen.yaml");

        let config_content = r#"
template_dir: site/templates
output_dir: public
exclude: layout.hbs
output_extension: htm
strict: true
template_vars:
  title: Docs
logging:
  level: debug
  format: compact
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        let settings = config.render_settings();

        assert_eq!(settings.template_dir, PathBuf::from("site/templates"));
        assert_eq!(settings.output_dir, PathBuf::from("public"));
        assert_eq!(settings.exclude, "layout.hbs");
        assert_eq!(settings.output_extension, "htm");
        assert!(settings.strict);
        assert_eq!(settings.variables.get("title"), Some(&"Docs".to_string()));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("pagegen.yaml");
        fs::write(&config_path, "output_dir: out\n").unwrap();

        let settings = Config::load(Some(config_path)).unwrap().render_settings();
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.template_dir, PathBuf::from("static/templates"));
        assert_eq!(settings.exclude, "base.html");
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let temp_dir = tempdir().unwrap();
        let result = Config::load(Some(temp_dir.path().join("absent.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_fails() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("pagegen.yaml");
        fs::write(&config_path, "strict: [not, a, bool]\n").unwrap();

        assert!(Config::load(Some(config_path)).is_err());
    }

    #[test]
    fn test_merge_variables() {
        let mut config = Config::default();
        config.merge_variables(HashMap::from([("a".to_string(), "1".to_string())]));
        assert_eq!(config.render_settings().variables.len(), 1);
    }
}
