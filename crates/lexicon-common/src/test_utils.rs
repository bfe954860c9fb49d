//! Test utilities shared by the Lexicon crates.
//!
//! Enabled for this crate's own tests and, for downstream crates, through
//! the `testing` feature.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory holding the given `(file name, contents)`
/// pairs. The directory is removed when the returned handle drops.
#[cfg(feature = "testing")]
pub fn locale_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).expect("Failed to write locale fixture");
    }
    dir
}

/// Locale fixtures in the JSON layout the store reads.
pub mod locale_fixtures {
    /// English catalog with a greeting and an empty value.
    pub const EN_US_JSON: &str = r#"{
    "greet": "Hello {name}",
    "farewell": "Goodbye, {name}. See you {when}!",
    "empty": ""
}"#;

    /// Spanish catalog mirroring [`EN_US_JSON`].
    pub const ES_ES_JSON: &str = r#"{
    "greet": "Hola {name}",
    "farewell": "Adiós, {name}. ¡Hasta {when}!"
}"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_fixtures_are_json_objects() {
        assert!(locale_fixtures::EN_US_JSON.trim_start().starts_with('{'));
        assert!(locale_fixtures::ES_ES_JSON.trim_end().ends_with('}'));
    }
}
