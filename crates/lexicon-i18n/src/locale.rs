//! Locale tags naming a language and region

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Length of a `language-REGION` prefix such as `en-US`.
pub const PREFERENCE_PREFIX_LEN: usize = 5;

/// Static default used when no client preference is supplied.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Identifier of a loaded language, taken verbatim from a locale file stem.
///
/// Tags are compared as plain strings: `en-US` and `en-us` are different
/// languages as far as the catalog is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Wrap a tag string as-is
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Derive a tag from a raw client preference such as an
    /// `Accept-Language` header value.
    ///
    /// Takes the first five characters verbatim (`en-US,en;q=0.9` →
    /// `en-US`), whitespace included. Returns `None` only for empty input.
    pub fn from_preference(preference: &str) -> Option<Self> {
        if preference.is_empty() {
            return None;
        }
        Some(Self(
            preference.chars().take(PREFERENCE_PREFIX_LEN).collect(),
        ))
    }

    /// The static fallback language
    pub fn fallback() -> Self {
        Self::new(FALLBACK_LANGUAGE)
    }

    /// Get the tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the tag as a BCP-47 language identifier
    pub fn to_language_identifier(&self) -> Result<LanguageIdentifier, LanguageIdentifierError> {
        self.0.parse()
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocaleTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LocaleTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl From<&LocaleTag> for LocaleTag {
    fn from(tag: &LocaleTag) -> Self {
        tag.clone()
    }
}
