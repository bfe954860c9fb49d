//! Per-request language selection over a shared store

use crate::error::TranslationResult;
use crate::locale::LocaleTag;
use crate::params::Params;
use crate::store::TranslationStore;

/// A borrowed store paired with its own language choice.
///
/// Views are cheap to create and never modify the store, so any number of
/// them can read one shared store concurrently.
#[derive(Debug, Clone)]
pub struct LocalizedView<'a> {
    store: &'a TranslationStore,
    language: LocaleTag,
}

impl<'a> LocalizedView<'a> {
    pub(crate) fn new(store: &'a TranslationStore, language: LocaleTag) -> Self {
        Self { store, language }
    }

    /// Render `key` in this view's language
    pub fn lookup(&self, key: &str, params: Option<&Params>) -> TranslationResult<String> {
        self.store.lookup_in(&self.language, key, params)
    }

    /// Whether `key` exists in this view's language
    pub fn has_key(&self, key: &str) -> bool {
        self.store.has_key(self.language.as_str(), key)
    }

    /// Whether this view's language is loaded
    pub fn is_available(&self) -> bool {
        self.store.has_language(self.language.as_str())
    }

    /// The language this view renders in
    pub fn language(&self) -> &LocaleTag {
        &self.language
    }

    /// The underlying store
    pub fn store(&self) -> &'a TranslationStore {
        self.store
    }
}
