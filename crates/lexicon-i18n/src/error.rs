//! Error types for translation store operations

use lexicon_common::LexiconError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying translations
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The locales directory does not exist or is not a directory
    #[error("Locales directory not found: {path:?}")]
    DirectoryNotFound { path: PathBuf },

    /// The locales directory has no entries at all
    #[error("Locales directory is empty: {path:?}")]
    DirectoryEmpty { path: PathBuf },

    /// No entry in the locales directory parsed into a translation map
    #[error("No valid locale files in {path:?}")]
    NoValidLocaleFiles { path: PathBuf },

    /// The effective language has no catalog entry
    #[error("Language '{language}' is not found in locale files")]
    LanguageNotFound { language: String },

    /// The key is absent from the effective language's translations
    #[error("Key '{key}' does not exist in translations for '{language}'")]
    KeyNotFound { key: String, language: String },

    /// Enclosing markers must be exactly an (open, close) pair
    #[error("Enclosing markers must have exactly two elements, got {count}")]
    InvalidMarkers { count: usize },

    /// Reading the locales directory itself failed
    #[error("Failed to read locales directory {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranslationError {
    /// The language involved in a lookup failure, if any
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::LanguageNotFound { language } | Self::KeyNotFound { language, .. } => {
                Some(language)
            }
            _ => None,
        }
    }
}

/// Result type for translation operations
pub type TranslationResult<T> = Result<T, TranslationError>;

impl From<TranslationError> for LexiconError {
    fn from(err: TranslationError) -> Self {
        let locale = err.language().map(str::to_string);
        LexiconError::localization_with_source(err.to_string(), locale, err)
    }
}
