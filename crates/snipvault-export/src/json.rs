use serde_json::Value;

use snipvault_core::error::CoreError;
use snipvault_core::models::snippet::Snippet;

use crate::error::ExportError;

/// Default file name for exports.
pub const EXPORT_FILENAME: &str = "code-snippets.json";

/// Pretty-print the collection as a JSON array (two-space indent).
pub fn export_json(snippets: &[Snippet]) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(snippets)?;
    tracing::info!(count = snippets.len(), bytes = json.len(), "snippets exported");
    Ok(json)
}

/// Parse the text of an import file. Shape checks happen in the store; this
/// only reports text that is not JSON at all.
pub fn parse_import(text: &str) -> Result<Value, ExportError> {
    serde_json::from_str(text).map_err(|e| ExportError::Import(CoreError::Format(e.to_string())))
}
