use serde::{Deserialize, Serialize};

use snipvault_core::models::theme::Theme;

/// Colours for one theme of the rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStyles {
    pub background: String,
    pub card: String,
    pub text: String,
    pub muted: String,
    pub code_background: String,

    /// Colours for the `code-*` highlight classes.
    pub tag: String,
    pub attribute: String,
    pub string: String,
    pub comment: String,
    pub keyword: String,
    pub function: String,
    pub number: String,
}

impl PageStyles {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::default(),
            Theme::Dark => Self {
                background: "#1a1a2e".to_string(),
                card: "#16213e".to_string(),
                text: "#e4e4e4".to_string(),
                muted: "#a0a0a0".to_string(),
                code_background: "#0f0f1a".to_string(),
                tag: "#ff7b72".to_string(),
                attribute: "#79c0ff".to_string(),
                string: "#a5d6ff".to_string(),
                comment: "#8b949e".to_string(),
                keyword: "#ff7b72".to_string(),
                function: "#d2a8ff".to_string(),
                number: "#79c0ff".to_string(),
            },
        }
    }
}

impl Default for PageStyles {
    fn default() -> Self {
        Self {
            background: "#f5f5f5".to_string(),
            card: "#ffffff".to_string(),
            text: "#333333".to_string(),
            muted: "#666666".to_string(),
            code_background: "#f8f8f8".to_string(),
            tag: "#22863a".to_string(),
            attribute: "#6f42c1".to_string(),
            string: "#032f62".to_string(),
            comment: "#6a737d".to_string(),
            keyword: "#d73a49".to_string(),
            function: "#6f42c1".to_string(),
            number: "#005cc5".to_string(),
        }
    }
}
