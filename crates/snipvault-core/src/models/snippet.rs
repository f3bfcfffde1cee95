use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// A stored code sample with its metadata.
///
/// Field names match the persisted JSON layout (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Snippet {
    /// Build a brand-new record from a validated draft, stamped with `now`.
    pub fn from_draft(draft: SnippetDraft, now: jiff::Timestamp) -> Self {
        Self {
            id: new_id(),
            title: draft.title,
            language: draft.language,
            tags: draft.tags,
            code: draft.code,
            description: draft.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields, keeping `id` and `created_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn apply_draft(&mut self, draft: SnippetDraft, now: jiff::Timestamp) {
        self.title = draft.title;
        self.language = draft.language;
        self.tags = draft.tags;
        self.code = draft.code;
        self.description = draft.description;
        self.updated_at = now.max(self.updated_at);
    }

    /// The editable fields of this record, e.g. to pre-fill an edit.
    pub fn to_draft(&self) -> SnippetDraft {
        SnippetDraft {
            title: self.title.clone(),
            language: self.language.clone(),
            tags: self.tags.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
        }
    }
}

/// The user-editable fields submitted on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetDraft {
    pub title: String,
    pub language: String,
    pub tags: Vec<String>,
    pub code: String,
    pub description: String,
}

impl SnippetDraft {
    /// Normalize the free-text fields the way the entry form does: title and
    /// description are trimmed, code is kept byte-for-byte.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.language = self.language.trim().to_string();
        self.description = self.description.trim().to_string();
        self.tags = self
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.is_empty() {
            return Err(CoreError::Validation { field: "title" });
        }
        if self.language.is_empty() {
            return Err(CoreError::Validation { field: "language" });
        }
        if self.code.is_empty() {
            return Err(CoreError::Validation { field: "code" });
        }
        Ok(())
    }
}

/// Whether a save creates a new record or overwrites an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(String),
}

/// Split a comma-separated tag list, trimming and dropping empty entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Generate a fresh opaque snippet id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SnippetDraft {
        SnippetDraft {
            title: "  Loop  ".to_string(),
            language: "javascript".to_string(),
            tags: vec![" demo ".to_string(), "".to_string()],
            code: "  for(;;){}\n".to_string(),
            description: " counts ".to_string(),
        }
    }

    #[test]
    fn normalized_trims_text_but_not_code() {
        let d = draft().normalized();
        assert_eq!(d.title, "Loop");
        assert_eq!(d.description, "counts");
        assert_eq!(d.tags, vec!["demo".to_string()]);
        assert_eq!(d.code, "  for(;;){}\n");
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut d = draft();
        d.title.clear();
        assert!(matches!(
            d.validate(),
            Err(CoreError::Validation { field: "title" })
        ));

        let mut d = draft();
        d.code.clear();
        assert!(matches!(
            d.validate(),
            Err(CoreError::Validation { field: "code" })
        ));
    }

    #[test]
    fn parse_tags_drops_blanks() {
        assert_eq!(parse_tags("a, b ,,  ,c"), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn apply_draft_keeps_identity_and_creation_time() {
        let t0: jiff::Timestamp = "2024-01-01T00:00:00Z".parse().unwrap();
        let t1: jiff::Timestamp = "2024-01-02T00:00:00Z".parse().unwrap();
        let mut s = Snippet::from_draft(draft().normalized(), t0);
        let id = s.id.clone();

        let mut edit = s.to_draft();
        edit.title = "Renamed".to_string();
        s.apply_draft(edit, t1);

        assert_eq!(s.id, id);
        assert_eq!(s.created_at, t0);
        assert_eq!(s.updated_at, t1);
        assert_eq!(s.title, "Renamed");
    }

    #[test]
    fn apply_draft_never_moves_updated_at_backwards() {
        let t0: jiff::Timestamp = "2024-01-02T00:00:00Z".parse().unwrap();
        let earlier: jiff::Timestamp = "2023-12-31T00:00:00Z".parse().unwrap();
        let mut s = Snippet::from_draft(draft().normalized(), t0);
        s.apply_draft(s.to_draft(), earlier);
        assert_eq!(s.updated_at, t0);
    }

    #[test]
    fn serializes_with_camel_case_timestamps() {
        let t0: jiff::Timestamp = "2024-01-01T00:00:00Z".parse().unwrap();
        let s = Snippet::from_draft(draft().normalized(), t0);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        assert_eq!(json["updatedAt"], "2024-01-01T00:00:00Z");
        assert!(json.get("created_at").is_none());
    }
}
