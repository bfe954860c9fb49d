//! Error types and utilities for Lexicon

use thiserror::Error;

/// Result type alias for Lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Boxed error used as the source of wrapped failures
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Lexicon operations
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Localization errors raised by the translation store
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Logging bootstrap errors
    #[error("Logging error: {message}")]
    Logging {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl LexiconError {
    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error with source
    pub fn localization_with_source(
        msg: impl Into<String>,
        locale: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new logging error with source
    pub fn logging_with_source(
        msg: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self::Logging {
            message: msg.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// The locale attached to a localization error, if any
    pub fn locale(&self) -> Option<&str> {
        match self {
            Self::Localization { locale, .. } => locale.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_display_formatting() {
        let config_error = LexiconError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert_eq!(config_error.to_string(), "Configuration error: Config loading failed");
        assert!(config_error.source().is_some());

        let validation_error = LexiconError::validation_field("Invalid input", "markers");
        assert_eq!(validation_error.to_string(), "Validation error: Invalid input");
        assert!(matches!(
            validation_error,
            LexiconError::Validation { field: Some(ref f), .. } if f == "markers"
        ));
    }

    #[test]
    fn test_localization_error_carries_locale() {
        let error = LexiconError::localization_with_source(
            "Translation missing",
            Some("en-US".to_string()),
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(error.to_string().contains("Localization error"));
        assert_eq!(error.locale(), Some("en-US"));

        let without_locale = LexiconError::localization_with_source(
            "Translation missing",
            None,
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(without_locale.locale(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexicon_error: LexiconError = io_error.into();

        assert!(lexicon_error.to_string().contains("I/O error"));
        assert!(lexicon_error.source().is_some());
        assert_eq!(lexicon_error.locale(), None);
    }

    #[test]
    fn test_logging_error_keeps_boxed_source() {
        let source: BoxedSource = "subscriber already set".into();
        let error = LexiconError::logging_with_source("failed to install subscriber", source);

        assert_eq!(error.to_string(), "Logging error: failed to install subscriber");
        assert_eq!(
            error.source().map(|s| s.to_string()),
            Some("subscriber already set".to_string())
        );
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = LexiconError::config_with_source("Middle layer", root_error);
        let top_error = LexiconError::localization_with_source("Top layer", None, middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert_eq!(error_count, 2);
    }
}
