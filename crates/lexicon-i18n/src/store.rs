//! The translation store

use crate::catalog::Catalog;
use crate::error::{TranslationError, TranslationResult};
use crate::locale::LocaleTag;
use crate::markers::EnclosingMarkers;
use crate::params::Params;
use crate::view::LocalizedView;
use lexicon_config::StoreSettings;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory scanned under the application root when no path is given.
pub const DEFAULT_LOCALES_DIR: &str = "locales";

/// Loaded translations plus the language and marker selection used by
/// [`TranslationStore::lookup`].
///
/// All file I/O happens in [`StoreBuilder::build`] and
/// [`TranslationStore::reload`]. Everything else is an in-memory read, so a
/// built store can be shared behind an `Arc` and queried per request through
/// [`TranslationStore::lookup_in`] or [`TranslationStore::localized`].
#[derive(Debug, Clone)]
pub struct TranslationStore {
    catalog: Catalog,
    locales_dir: PathBuf,
    default_language: LocaleTag,
    active_language: Option<LocaleTag>,
    markers: EnclosingMarkers,
}

impl TranslationStore {
    /// Load every locale file in `locales_dir`, taking the default language
    /// from `client_language` when it is non-empty.
    pub fn new<P: AsRef<Path>>(
        locales_dir: P,
        client_language: Option<&str>,
    ) -> TranslationResult<Self> {
        let mut builder = Self::builder().locales_path(locales_dir.as_ref());
        if let Some(preference) = client_language {
            builder = builder.client_language(preference);
        }
        builder.build()
    }

    /// Start configuring a store
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Build a store from configuration settings
    pub fn from_settings(
        settings: &StoreSettings,
        client_language: Option<&str>,
    ) -> TranslationResult<Self> {
        let mut builder = Self::builder()
            .app_root(&settings.app_root)
            .fallback_language(settings.fallback_language.as_str())
            .enclosing_markers(EnclosingMarkers::from_slice(&settings.enclosing_markers)?);

        if let Some(path) = &settings.locales_path {
            builder = builder.locales_path(path);
        }
        if let Some(preference) = client_language {
            builder = builder.client_language(preference);
        }
        builder.build()
    }

    /// Render `key` in the effective language.
    ///
    /// The effective language is the active language if one is set, else the
    /// default language. Lookups never fall back to another language.
    pub fn lookup(&self, key: &str, params: Option<&Params>) -> TranslationResult<String> {
        self.lookup_in(self.effective_language(), key, params)
    }

    /// Render `key` in an explicitly chosen language
    pub fn lookup_in(
        &self,
        language: &LocaleTag,
        key: &str,
        params: Option<&Params>,
    ) -> TranslationResult<String> {
        let template = self.template(language, key)?;

        Ok(match params {
            Some(params) if !params.is_empty() => self.markers.render(template, params),
            _ => template.to_string(),
        })
    }

    /// The raw template for `key` in `language`, without substitution
    pub fn template(&self, language: &LocaleTag, key: &str) -> TranslationResult<&str> {
        let translations =
            self.catalog
                .get(language.as_str())
                .ok_or_else(|| TranslationError::LanguageNotFound {
                    language: language.to_string(),
                })?;

        translations
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| TranslationError::KeyNotFound {
                key: key.to_string(),
                language: language.to_string(),
            })
    }

    /// A per-request view with its own language choice
    pub fn localized(&self, language: impl Into<LocaleTag>) -> LocalizedView<'_> {
        LocalizedView::new(self, language.into())
    }

    /// A per-request view for a raw client preference, using the store's
    /// default language when the preference is missing or empty
    pub fn for_client(&self, client_language: Option<&str>) -> LocalizedView<'_> {
        let language = client_language
            .and_then(LocaleTag::from_preference)
            .unwrap_or_else(|| self.default_language.clone());
        LocalizedView::new(self, language)
    }

    /// Replace the enclosing markers; `pair` must have exactly two elements
    pub fn set_enclosing_markers<S: AsRef<str>>(&mut self, pair: &[S]) -> TranslationResult<()> {
        self.markers = EnclosingMarkers::from_slice(pair)?;
        debug!("Enclosing markers set to {}", self.markers);
        Ok(())
    }

    /// Current enclosing markers
    pub fn enclosing_markers(&self) -> &EnclosingMarkers {
        &self.markers
    }

    /// The explicitly selected language, if any
    pub fn active_language(&self) -> Option<&LocaleTag> {
        self.active_language.as_ref()
    }

    /// Select the language used by [`lookup`](Self::lookup). An empty tag
    /// clears the selection.
    ///
    /// The tag is not checked against the catalog; an unknown language
    /// surfaces as [`TranslationError::LanguageNotFound`] on lookup.
    pub fn set_active_language(&mut self, language: impl Into<LocaleTag>) {
        let language = language.into();
        if language.as_str().is_empty() {
            self.active_language = None;
        } else {
            debug!("Active language set to '{}'", language);
            self.active_language = Some(language);
        }
    }

    /// Clear the explicit language selection
    pub fn clear_active_language(&mut self) {
        self.active_language = None;
    }

    /// The active language if set, else the default language
    pub fn effective_language(&self) -> &LocaleTag {
        self.active_language.as_ref().unwrap_or(&self.default_language)
    }

    /// The language resolved at construction
    pub fn default_language(&self) -> &LocaleTag {
        &self.default_language
    }

    /// Directory the catalog was loaded from
    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }

    /// The loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Loaded languages in sorted order
    pub fn languages(&self) -> Vec<&LocaleTag> {
        self.catalog.languages().collect()
    }

    /// Whether a language is loaded
    pub fn has_language(&self, language: &str) -> bool {
        self.catalog.contains(language)
    }

    /// Whether `key` exists in `language`, including keys mapped to `""`
    pub fn has_key(&self, language: &str, key: &str) -> bool {
        self.catalog
            .get(language)
            .is_some_and(|translations| translations.contains_key(key))
    }

    /// Re-scan the locales directory and replace the whole catalog.
    ///
    /// On failure the current catalog stays in place.
    pub fn reload(&mut self) -> TranslationResult<()> {
        debug!("Reloading locales from {:?}", self.locales_dir);

        match Catalog::load_dir(&self.locales_dir) {
            Ok(catalog) => {
                self.catalog = catalog;
                info!("Reloaded {} locale(s)", self.catalog.len());
                Ok(())
            }
            Err(e) => {
                warn!("Reload failed, keeping current catalog: {}", e);
                Err(e)
            }
        }
    }
}

/// Builder for [`TranslationStore`]
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    app_root: PathBuf,
    locales_path: Option<PathBuf>,
    client_language: Option<String>,
    fallback_language: LocaleTag,
    markers: EnclosingMarkers,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("."),
            locales_path: None,
            client_language: None,
            fallback_language: LocaleTag::fallback(),
            markers: EnclosingMarkers::default(),
        }
    }
}

impl StoreBuilder {
    /// Root that relative locales paths resolve against
    #[must_use]
    pub fn app_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.app_root = root.into();
        self
    }

    /// Locales directory, absolute or relative to the application root
    #[must_use]
    pub fn locales_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.locales_path = Some(path.into());
        self
    }

    /// Raw client preference, e.g. an `Accept-Language` header value
    #[must_use]
    pub fn client_language(mut self, preference: impl Into<String>) -> Self {
        self.client_language = Some(preference.into());
        self
    }

    /// Language used when no client preference is supplied
    #[must_use]
    pub fn fallback_language(mut self, language: impl Into<LocaleTag>) -> Self {
        self.fallback_language = language.into();
        self
    }

    /// Initial enclosing markers
    #[must_use]
    pub fn enclosing_markers(mut self, markers: EnclosingMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// The directory [`build`](Self::build) will scan
    pub fn resolved_locales_dir(&self) -> PathBuf {
        match &self.locales_path {
            Some(path) => self.app_root.join(path),
            None => self.app_root.join(DEFAULT_LOCALES_DIR),
        }
    }

    /// Load the catalog and resolve the default language
    pub fn build(self) -> TranslationResult<TranslationStore> {
        let locales_dir = self.resolved_locales_dir();
        let catalog = Catalog::load_dir(&locales_dir)?;

        let default_language = self
            .client_language
            .as_deref()
            .and_then(LocaleTag::from_preference)
            .unwrap_or(self.fallback_language);

        info!(
            "Translation store ready: {} locale(s) from {:?}, default language '{}'",
            catalog.len(),
            locales_dir,
            default_language
        );

        Ok(TranslationStore {
            catalog,
            locales_dir,
            default_language,
            active_language: None,
            markers: self.markers,
        })
    }
}
