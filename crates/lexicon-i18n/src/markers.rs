//! Enclosing markers delimiting placeholder names inside templates

use crate::error::{TranslationError, TranslationResult};
use crate::params::Params;
use std::fmt;

/// An (open, close) delimiter pair, `{` and `}` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingMarkers {
    open: String,
    close: String,
}

impl EnclosingMarkers {
    /// Create a marker pair
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Build a pair from a slice, which must hold exactly two elements
    pub fn from_slice<S: AsRef<str>>(pair: &[S]) -> TranslationResult<Self> {
        match pair {
            [open, close] => Ok(Self::new(open.as_ref(), close.as_ref())),
            _ => Err(TranslationError::InvalidMarkers { count: pair.len() }),
        }
    }

    /// Opening marker
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Closing marker
    pub fn close(&self) -> &str {
        &self.close
    }

    /// The literal text a parameter named `name` replaces
    pub fn placeholder(&self, name: &str) -> String {
        format!("{}{}{}", self.open, name, self.close)
    }

    /// Substitute every parameter into `template`.
    ///
    /// Each parameter is one plain substring replacement pass over the text
    /// produced by the previous pass, in parameter order. Placeholders with
    /// no matching parameter are left untouched.
    pub fn render(&self, template: &str, params: &Params) -> String {
        let mut text = template.to_string();
        for (name, value) in params.iter() {
            let placeholder = self.placeholder(name);
            // An empty pattern would match between every character.
            if placeholder.is_empty() {
                continue;
            }
            if text.contains(&placeholder) {
                text = text.replace(&placeholder, value);
            }
        }
        text
    }
}

impl Default for EnclosingMarkers {
    fn default() -> Self {
        Self::new("{", "}")
    }
}

impl fmt::Display for EnclosingMarkers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}name{}", self.open, self.close)
    }
}

impl TryFrom<Vec<String>> for EnclosingMarkers {
    type Error = TranslationError;

    fn try_from(pair: Vec<String>) -> TranslationResult<Self> {
        Self::from_slice(&pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn test_default_markers_are_braces() {
        let markers = EnclosingMarkers::default();
        assert_eq!(markers.open(), "{");
        assert_eq!(markers.close(), "}");
        assert_eq!(markers.placeholder("name"), "{name}");
    }

    #[test]
    fn test_from_slice_requires_exactly_two() {
        assert!(EnclosingMarkers::from_slice(&["[", "]"]).is_ok());

        let one = EnclosingMarkers::from_slice(&["x"]);
        assert!(matches!(one, Err(TranslationError::InvalidMarkers { count: 1 })));

        let three = EnclosingMarkers::from_slice(&["<", "%", ">"]);
        assert!(matches!(three, Err(TranslationError::InvalidMarkers { count: 3 })));

        let none: [&str; 0] = [];
        assert!(matches!(
            EnclosingMarkers::from_slice(&none),
            Err(TranslationError::InvalidMarkers { count: 0 })
        ));
    }

    #[test]
    fn test_try_from_vec() {
        let markers = EnclosingMarkers::try_from(vec!["%{".to_string(), "}".to_string()]).unwrap();
        assert_eq!(markers.placeholder("n"), "%{n}");
        assert!(EnclosingMarkers::try_from(vec!["{".to_string()]).is_err());
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let markers = EnclosingMarkers::default();
        let rendered = markers.render("{a} and {a} but not {b}", &params!["a" => 1]);
        assert_eq!(rendered, "1 and 1 but not {b}");
    }

    #[test]
    fn test_render_with_multi_character_markers() {
        let markers = EnclosingMarkers::new("{{", "}}");
        let rendered = markers.render("Hi {{name}}, {name}", &params!["name" => "Ana"]);
        assert_eq!(rendered, "Hi Ana, {name}");
    }

    #[test]
    fn test_render_skips_empty_placeholder() {
        let markers = EnclosingMarkers::new("", "");
        let rendered = markers.render("abc", &params!["" => "x"]);
        assert_eq!(rendered, "abc");
    }

    #[test]
    fn test_display_shows_placeholder_shape() {
        assert_eq!(EnclosingMarkers::new("[", "]").to_string(), "[name]");
    }
}
