//! Translation lookup for Lexicon
//!
//! This crate loads one flat key→string catalog per language from a locales
//! directory and renders templates by substituting named placeholders.
//!
//! - Locale files are parsed as data (JSON, TOML or YAML), never executed
//! - The active language is an explicit override, else the client's
//!   preference, else a static fallback
//! - Placeholder markers default to `{` and `}` and can be replaced
//! - Lookups never fall back to another language
//!
//! # Example
//!
//! ```rust,no_run
//! use lexicon_i18n::{params, TranslationStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = TranslationStore::new("locales", Some("es-ES,es;q=0.9"))?;
//!
//! let greeting = store.lookup("greet", Some(&params!["name" => "Ana"]))?;
//! println!("{greeting}");
//!
//! store.set_enclosing_markers(&["[", "]"])?;
//! store.set_active_language("en-US");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod locale;
pub mod markers;
pub mod params;
pub mod store;
pub mod view;

pub use catalog::{Catalog, LocaleFormat, Translations};
pub use error::{TranslationError, TranslationResult};
pub use locale::LocaleTag;
pub use markers::EnclosingMarkers;
pub use params::Params;
pub use store::{StoreBuilder, TranslationStore};
pub use view::LocalizedView;
