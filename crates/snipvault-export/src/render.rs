use serde::Serialize;
use tera::{Context, Tera};

use snipvault_core::models::snippet::Snippet;
use snipvault_core::models::theme::Theme;
use snipvault_search::highlight;

use crate::error::ExportError;
use crate::styles::PageStyles;

const PAGE_TEMPLATE_NAME: &str = "snippets.html";

// Autoescaping is on for `.html` templates; only `code_html` is marked safe
// because `highlight` has already escaped it.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="{{ theme }}">
<head>
<meta charset="utf-8">
<title>Code Snippets</title>
<style>
body { background: {{ styles.background }}; color: {{ styles.text }}; font-family: sans-serif; }
.snippet-card { background: {{ styles.card }}; border-radius: 8px; padding: 1rem; margin: 1rem 0; }
.snippet-language, .snippet-description, .empty-state { color: {{ styles.muted }}; }
.tag {
  display: inline-block; margin-right: .25rem; padding: 0 .5rem;
  border: 1px solid {{ styles.muted }}; border-radius: 4px;
}
.snippet-code {
  background: {{ styles.code_background }};
  white-space: pre-wrap; font-family: monospace; padding: .75rem;
}
.code-tag { color: {{ styles.tag }}; }
.code-attribute, .code-property { color: {{ styles.attribute }}; }
.code-string, .code-value { color: {{ styles.string }}; }
.code-comment { color: {{ styles.comment }}; font-style: italic; }
.code-keyword { color: {{ styles.keyword }}; }
.code-function, .code-variable { color: {{ styles.function }}; }
.code-number { color: {{ styles.number }}; }
</style>
</head>
<body>
<div id="snippets-container">
{% if cards %}
{% for card in cards %}
<div class="snippet-card" id="snippet-{{ card.id }}">
  <div class="snippet-header">
    <div class="snippet-title">{{ card.title }}</div>
    <span class="snippet-language">{{ card.language | upper }}</span>
  </div>
  {% if card.tags %}<div class="snippet-tags">
    {%- for tag in card.tags %}<span class="tag">{{ tag }}</span>{% endfor -%}
  </div>{% endif %}
  {% if card.description %}<div class="snippet-description">{{ card.description }}</div>{% endif %}
  <div class="snippet-code syntax-{{ card.language }}">{{ card.code_html | safe }}</div>
</div>
{% endfor %}
{% else %}
<div class="empty-state"><p>{{ empty_message }}</p></div>
{% endif %}
</div>
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct Card<'a> {
    id: &'a str,
    title: &'a str,
    language: &'a str,
    tags: &'a [String],
    description: &'a str,
    code_html: String,
}

/// Message shown when no card is visible.
///
/// `total` is the size of the whole store, not of the filtered view.
pub fn empty_message(total: usize) -> &'static str {
    if total == 0 {
        "No snippets found. Add your first code snippet!"
    } else {
        "No snippets found. Try adjusting your search or filter."
    }
}

/// Render the visible snippets as a standalone HTML page.
pub fn render_page(
    visible: &[&Snippet],
    total: usize,
    theme: Theme,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let cards: Vec<Card<'_>> = visible
        .iter()
        .map(|s| Card {
            id: &s.id,
            title: &s.title,
            language: &s.language,
            tags: &s.tags,
            description: &s.description,
            code_html: highlight(&s.code, &s.language),
        })
        .collect();

    let mut context = Context::new();
    context.insert("theme", theme.as_str());
    context.insert("styles", &PageStyles::for_theme(theme));
    context.insert("cards", &cards);
    context.insert("empty_message", empty_message(total));

    let rendered = tera.render(PAGE_TEMPLATE_NAME, &context)?;
    tracing::info!(cards = cards.len(), total, %theme, "page rendered");
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use snipvault_core::models::snippet::SnippetDraft;

    use super::*;

    fn snippet(title: &str, language: &str, code: &str, tags: &[&str]) -> Snippet {
        let now: jiff::Timestamp = "2024-01-01T00:00:00Z".parse().unwrap();
        Snippet::from_draft(
            SnippetDraft {
                title: title.to_string(),
                language: language.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                code: code.to_string(),
                description: String::new(),
            },
            now,
        )
    }

    #[test]
    fn cards_escape_metadata_and_keep_highlight_markup() {
        let s = snippet("<script>alert(1)</script>", "html", "<b>hi</b>", &["ui"]);
        let page = render_page(&[&s], 1, Theme::Dark).unwrap();

        assert!(page.contains("data-theme=\"dark\""));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("<span class=\"code-tag\">b</span>"));
        assert!(page.contains("<span class=\"snippet-language\">HTML</span>"));
        assert!(page.contains("<span class=\"tag\">ui</span>"));
        assert!(page.contains("syntax-html"));
    }

    #[test]
    fn empty_store_invites_first_snippet() {
        let page = render_page(&[], 0, Theme::Light).unwrap();
        assert!(page.contains("Add your first code snippet!"));
    }

    #[test]
    fn empty_view_of_non_empty_store_suggests_filter_change() {
        let page = render_page(&[], 3, Theme::Light).unwrap();
        assert!(page.contains("Try adjusting your search or filter."));
    }

    #[test]
    fn description_block_only_when_present() {
        let s = snippet("t", "css", "a{}", &[]);
        let page = render_page(&[&s], 1, Theme::Light).unwrap();
        assert!(!page.contains("<div class=\"snippet-description\">"));
        assert!(!page.contains("<div class=\"snippet-tags\">"));
    }
}
