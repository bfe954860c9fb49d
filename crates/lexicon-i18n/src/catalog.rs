//! Loading locale files into an in-memory catalog

use crate::error::{TranslationError, TranslationResult};
use crate::locale::LocaleTag;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Flat key → template mapping of a single language
pub type Translations = HashMap<String, String>;

/// Data formats accepted for locale files, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleFormat {
    /// `.json` object of strings
    Json,
    /// `.toml` table of strings
    Toml,
    /// `.yaml` / `.yml` mapping of strings
    Yaml,
}

impl LocaleFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parse file contents into a flat translation map
    pub fn parse(&self, content: &str) -> Result<Translations, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for LocaleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        })
    }
}

/// All loaded languages and their translations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    languages: BTreeMap<LocaleTag, Translations>,
}

impl Catalog {
    /// Scan `dir` (non-recursively) and load every recognised locale file.
    ///
    /// Files that cannot be read or parsed are skipped with a warning. The
    /// first file per stem in file-name order wins.
    pub fn load_dir(dir: &Path) -> TranslationResult<Self> {
        if !dir.is_dir() {
            return Err(TranslationError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let io_error = |source| TranslationError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(io_error)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()
            .map_err(io_error)?;

        if entries.is_empty() {
            return Err(TranslationError::DirectoryEmpty {
                path: dir.to_path_buf(),
            });
        }
        entries.sort();

        let mut catalog = Self::default();
        for path in entries {
            if let Some((tag, translations)) = load_file(&path) {
                if catalog.languages.contains_key(&tag) {
                    warn!("Duplicate locale '{}' in {:?}, keeping the first file", tag, path);
                    continue;
                }
                catalog.languages.insert(tag, translations);
            }
        }

        if catalog.is_empty() {
            return Err(TranslationError::NoValidLocaleFiles {
                path: dir.to_path_buf(),
            });
        }

        info!(
            "Loaded {} locale(s) from {:?}: {:?}",
            catalog.len(),
            dir,
            catalog.languages().map(LocaleTag::as_str).collect::<Vec<_>>()
        );
        Ok(catalog)
    }

    /// Build a catalog from in-memory translations
    pub fn from_languages<I, T>(languages: I) -> Self
    where
        I: IntoIterator<Item = (T, Translations)>,
        T: Into<LocaleTag>,
    {
        Self {
            languages: languages
                .into_iter()
                .map(|(tag, translations)| (tag.into(), translations))
                .collect(),
        }
    }

    /// Translations for a language
    pub fn get(&self, language: &str) -> Option<&Translations> {
        self.languages.get(language)
    }

    /// Whether the language is loaded
    pub fn contains(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Loaded languages in sorted order
    pub fn languages(&self) -> impl Iterator<Item = &LocaleTag> {
        self.languages.keys()
    }

    /// Number of loaded languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language is loaded
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Load one directory entry, or `None` if it is not a usable locale file
fn load_file(path: &Path) -> Option<(LocaleTag, Translations)> {
    if !path.is_file() {
        debug!("Skipping non-file entry: {:?}", path);
        return None;
    }

    let stem = path.file_stem()?;
    let Some(stem) = stem.to_str() else {
        debug!("Skipping file with a non-UTF-8 name: {:?}", path);
        return None;
    };
    if stem.starts_with('.') {
        debug!("Skipping hidden file: {:?}", path);
        return None;
    }

    let Some(format) = LocaleFormat::from_path(path) else {
        debug!("Skipping file without a locale extension: {:?}", path);
        return None;
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read locale file {:?}: {}", path, e);
            return None;
        }
    };

    let translations = match format.parse(&content) {
        Ok(translations) => translations,
        Err(e) => {
            warn!("Failed to parse {} locale file {:?}: {}", format, path, e);
            return None;
        }
    };

    let tag = LocaleTag::new(stem);
    if tag.to_language_identifier().is_err() {
        debug!("Locale file stem '{}' is not a BCP-47 tag, loading verbatim", stem);
    }

    debug!("Loaded {} keys for '{}' from {:?}", translations.len(), tag, path);
    Some((tag, translations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(LocaleFormat::from_path(Path::new("en-US.json")), Some(LocaleFormat::Json));
        assert_eq!(LocaleFormat::from_path(Path::new("en-US.JSON")), Some(LocaleFormat::Json));
        assert_eq!(LocaleFormat::from_path(Path::new("en-US.toml")), Some(LocaleFormat::Toml));
        assert_eq!(LocaleFormat::from_path(Path::new("en-US.yml")), Some(LocaleFormat::Yaml));
        assert_eq!(LocaleFormat::from_path(Path::new("en-US.php")), None);
        assert_eq!(LocaleFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_parse_rejects_nested_values() {
        assert!(LocaleFormat::Json.parse(r#"{"a": "b"}"#).is_ok());
        assert!(LocaleFormat::Json.parse(r#"{"a": {"b": "c"}}"#).is_err());
        assert!(LocaleFormat::Json.parse(r#"{"a": 1}"#).is_err());
        assert!(LocaleFormat::Json.parse(r#"["a"]"#).is_err());

        assert!(LocaleFormat::Toml.parse("open = \"Open\"\n").is_ok());
        assert!(LocaleFormat::Toml.parse("[menu]\nopen = \"Open\"\n").is_err());
        assert!(LocaleFormat::Toml.parse("count = 1\n").is_err());

        assert!(LocaleFormat::Yaml.parse("open: Open\n").is_ok());
        assert!(LocaleFormat::Yaml.parse("menu:\n  open: Open\n").is_err());
        assert!(LocaleFormat::Yaml.parse("items:\n  - a\n").is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_load_dir_skips_non_utf8_file_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"\xff.json")), r#"{"k": "v"}"#).unwrap();
        write(&dir, "en-US.json", r#"{"k": "v"}"#);

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("en-US").is_some());
    }

    #[test]
    fn test_load_dir_mixed_formats() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en-US.json", r#"{"greet": "Hello {name}"}"#);
        write(&dir, "es-ES.toml", "greet = \"Hola {name}\"\n");
        write(&dir, "fr-FR.yaml", "greet: \"Bonjour {name}\"\n");
        write(&dir, "notes.txt", "not a locale");

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        let languages: Vec<_> = catalog.languages().map(LocaleTag::as_str).collect();
        assert_eq!(languages, vec!["en-US", "es-ES", "fr-FR"]);
        assert_eq!(
            catalog.get("es-ES").and_then(|t| t.get("greet")).map(String::as_str),
            Some("Hola {name}")
        );
    }

    #[test]
    fn test_load_dir_skips_malformed_and_nested() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en-US.json", r#"{"greet": "Hello"}"#);
        write(&dir, "broken.json", "{ not json");
        write(&dir, "nested.json", r#"{"menu": {"open": "Open"}}"#);
        fs::create_dir(dir.path().join("de-DE.json")).unwrap();

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("en-US"));
        assert!(!catalog.contains("de-DE"));
    }

    #[test]
    fn test_load_dir_first_stem_wins() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en-US.json", r#"{"source": "json"}"#);
        write(&dir, "en-US.toml", "source = \"toml\"\n");

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        assert_eq!(
            catalog.get("en-US").and_then(|t| t.get("source")).map(String::as_str),
            Some("json")
        );
    }

    #[test]
    fn test_load_dir_keeps_empty_mapping() {
        let dir = TempDir::new().unwrap();
        write(&dir, "xx.json", "{}");

        let catalog = Catalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.get("xx").map(HashMap::len), Some(0));
    }

    #[test]
    fn test_load_dir_errors() {
        let dir = TempDir::new().unwrap();

        let missing = Catalog::load_dir(&dir.path().join("missing"));
        assert!(matches!(missing, Err(TranslationError::DirectoryNotFound { .. })));

        let empty = Catalog::load_dir(dir.path());
        assert!(matches!(empty, Err(TranslationError::DirectoryEmpty { .. })));

        write(&dir, "readme.md", "# locales");
        let invalid = Catalog::load_dir(dir.path());
        assert!(matches!(invalid, Err(TranslationError::NoValidLocaleFiles { .. })));
    }

    #[test]
    fn test_load_dir_on_a_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        write(&dir, "en-US.json", "{}");

        let result = Catalog::load_dir(&dir.path().join("en-US.json"));
        assert!(matches!(result, Err(TranslationError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_hidden_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".en-US.json", r#"{"a": "b"}"#);

        let result = Catalog::load_dir(dir.path());
        assert!(matches!(result, Err(TranslationError::NoValidLocaleFiles { .. })));
    }

    #[test]
    fn test_from_languages() {
        let mut en = Translations::new();
        en.insert("greet".to_string(), "Hello".to_string());
        let catalog = Catalog::from_languages([("en-US", en)]);
        assert!(catalog.contains("en-US"));
        assert!(!catalog.is_empty());
    }
}
