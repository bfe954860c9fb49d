//! # Lexicon Config
//!
//! Typed configuration for the translation store and logging, loaded from a
//! YAML or TOML file with environment variable overrides and validated
//! before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, LoggingSettings, StoreSettings};
