use std::fmt;

/// The language families the renderer knows about.
///
/// Snippets store their language as a free tag; anything outside the
/// built-in families is kept verbatim in [`Language::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    Html,
    Css,
    JavaScript,
    Other(String),
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "html" => Language::Html,
            "css" => Language::Css,
            "javascript" => Language::JavaScript,
            other => Language::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::JavaScript => "javascript",
            Language::Other(tag) => tag,
        }
    }

    /// Only markup can be rendered as a live preview.
    pub fn supports_preview(&self) -> bool {
        matches!(self, Language::Html)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip() {
        for tag in ["html", "css", "javascript"] {
            assert_eq!(Language::from_tag(tag).tag(), tag);
        }
    }

    #[test]
    fn unknown_tags_are_kept_verbatim() {
        assert_eq!(
            Language::from_tag("python"),
            Language::Other("python".to_string())
        );
        // Tags are matched exactly, the same way the language filter is.
        assert_eq!(
            Language::from_tag("HTML"),
            Language::Other("HTML".to_string())
        );
    }

    #[test]
    fn preview_is_markup_only() {
        assert!(Language::Html.supports_preview());
        assert!(!Language::Css.supports_preview());
        assert!(!Language::Other("text".to_string()).supports_preview());
    }
}
