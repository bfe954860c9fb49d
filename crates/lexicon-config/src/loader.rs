//! Configuration loading utilities

use crate::settings::Config;
use lexicon_common::{LexiconError, Result as LexiconResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "LEXICON_CONFIG_PATH";

/// Files searched in the working directory when no path is configured
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["lexicon.yaml", "lexicon.yml", "lexicon.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The file extension names no supported format
    #[error("Unsupported configuration format: {0:?}")]
    UnsupportedFormat(PathBuf),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for LexiconError {
    fn from(err: ConfigError) -> Self {
        LexiconError::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file, reading overrides through `vars`
    pub fn load_config_with<P, F>(path: P, vars: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);

        let mut config = Self::parse_file(path)?;
        Self::apply_overrides(&mut config, vars)?;
        config.validate()?;

        info!("Configuration loaded from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the process environment and the working
    /// directory
    pub fn load() -> LexiconResult<Config> {
        Ok(Self::load_with(|var| env::var(var).ok(), Path::new("."))?)
    }

    /// Resolve and load configuration, reading variables through `vars`.
    ///
    /// Search order: the file named by `LEXICON_CONFIG_PATH` (relative paths
    /// resolve against `base_dir`), then the first of
    /// [`DEFAULT_CONFIG_FILES`] present in `base_dir`, then built-in
    /// defaults. Overrides and validation apply in every case.
    pub fn load_with<F>(vars: F, base_dir: &Path) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(config_path) = vars(CONFIG_PATH_VAR) {
            return Self::load_config_with(base_dir.join(config_path), &vars);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| base_dir.join(name))
            .find(|path| path.is_file())
        {
            return Self::load_config_with(path, &vars);
        }

        debug!("No configuration file found in {:?}, using defaults", base_dir);
        let mut config = Config::default();
        Self::apply_overrides(&mut config, &vars)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides read through `vars` to configuration
    pub fn apply_overrides<F>(config: &mut Config, vars: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Store configuration overrides
        if let Some(root) = vars("LEXICON_APP_ROOT") {
            config.store.app_root = PathBuf::from(root);
        }

        if let Some(path) = vars("LEXICON_LOCALES_PATH") {
            config.store.locales_path = Some(PathBuf::from(path));
        }

        if let Some(language) = vars("LEXICON_FALLBACK_LANGUAGE") {
            config.store.fallback_language = language;
        }

        // Logging configuration overrides
        if let Some(level) = vars("LEXICON_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = vars("LEXICON_LOG_FORMAT") {
            config.logging.format = format;
        }

        if let Some(file) = vars("LEXICON_LOG_FILE") {
            config.logging.file = Some(PathBuf::from(file));
        }

        if let Some(spans) = vars("LEXICON_LOG_SPANS") {
            config.logging.include_spans =
                spans.trim().parse().map_err(|e| ConfigError::EnvParseError {
                    var: "LEXICON_LOG_SPANS".to_string(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }

    fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => {
                let content = std::fs::read_to_string(path)?;
                Ok(serde_yaml::from_str(&content)?)
            }
            Some("toml") => {
                let content = std::fs::read_to_string(path)?;
                Ok(toml::from_str(&content)?)
            }
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
