//! Custom validators used by the configuration structures

use lexicon_common::LogFormat;
use validator::ValidationError;

/// Plain level names accepted by the logging filter
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accept a plain level name or a `target=level` filter directive list
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let level = level.trim();
    if level.is_empty() {
        return Err(ValidationError::new("empty_log_level"));
    }

    let valid = level.split(',').all(|directive| {
        let level = directive.rsplit('=').next().unwrap_or(directive).trim();
        LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
    });

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Accept the names understood by [`LogFormat`]
pub fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    format
        .parse::<LogFormat>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_log_format"))
}
