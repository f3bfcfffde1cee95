use snipvault_core::models::language::Language;
use snipvault_core::models::snippet::Snippet;

use crate::error::ExportError;

/// The document to load into an isolated preview surface.
///
/// Markup snippets are returned raw, unescaped, so the browser renders them.
/// Every other language is refused.
pub fn preview_document(snippet: &Snippet) -> Result<&str, ExportError> {
    let language = Language::from_tag(&snippet.language);
    if !language.supports_preview() {
        return Err(ExportError::PreviewUnsupported {
            language: snippet.language.clone(),
        });
    }
    Ok(&snippet.code)
}
