//! Validation of externally supplied snippet collections.
//!
//! Pure functions over `serde_json::Value`; the store applies the result.

use serde_json::Value;

use crate::error::CoreError;
use crate::models::snippet::SnippetDraft;

/// Extract the importable records from a parsed import file.
///
/// A non-array top level is a format error. Elements that are not objects or
/// lack a non-empty string `title`, `language` or `code` are skipped. Ids and
/// timestamps on the input are ignored. If nothing survives, the whole import
/// fails with [`CoreError::EmptyImport`].
pub fn validate_import(value: &Value) -> Result<Vec<SnippetDraft>, CoreError> {
    let items = value
        .as_array()
        .ok_or_else(|| CoreError::Format("expected a JSON array of snippets".to_string()))?;

    let drafts: Vec<SnippetDraft> = items.iter().filter_map(draft_from_value).collect();

    if drafts.is_empty() {
        return Err(CoreError::EmptyImport);
    }
    Ok(drafts)
}

fn draft_from_value(value: &Value) -> Option<SnippetDraft> {
    let obj = value.as_object()?;

    let required = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let tags = obj
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(SnippetDraft {
        title: required("title")?,
        language: required("language")?,
        tags,
        code: required("code")?,
        description,
    })
}
