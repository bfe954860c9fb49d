//! Application configuration structures

use lexicon_common::{LexiconError, LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Translation store configuration
    #[validate]
    pub store: StoreSettings,

    /// Logging configuration
    #[validate]
    pub logging: LoggingSettings,
}

/// Where locale files live and how lookups behave by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct StoreSettings {
    /// Root that a relative `locales_path` resolves against
    pub app_root: PathBuf,

    /// Locales directory; `<app_root>/locales` when unset
    pub locales_path: Option<PathBuf>,

    /// Language used when the client supplies no preference
    #[validate(length(min = 1, message = "Fallback language cannot be empty"))]
    pub fallback_language: String,

    /// Placeholder delimiters as an `[open, close]` pair
    #[validate(length(equal = 2, message = "Enclosing markers must have exactly two elements"))]
    pub enclosing_markers: Vec<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("."),
            locales_path: None,
            fallback_language: "en-US".to_string(),
            enclosing_markers: vec!["{".to_string(), "}".to_string()],
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level or filter directive, e.g. "info" or "lexicon_i18n=debug"
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Invalid log level"
    ))]
    pub level: String,

    /// Output style: compact, pretty or json
    #[validate(custom(
        function = "crate::validation::validate_log_format",
        message = "Invalid log format"
    ))]
    pub format: String,

    /// Optional log file; stdout when unset
    pub file: Option<PathBuf>,

    /// Whether span open/close events are logged
    pub include_spans: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact.to_string(),
            file: None,
            include_spans: false,
        }
    }
}

impl LoggingSettings {
    /// Convert into the logging bootstrap configuration
    pub fn to_logging_config(&self) -> Result<LoggingConfig, LexiconError> {
        Ok(LoggingConfig {
            level: self.level.clone(),
            format: self.format.parse()?,
            file_path: self.file.clone(),
            include_spans: self.include_spans,
            ..LoggingConfig::default()
        })
    }
}
