use serde_json::Value;

use snipvault_core::error::CoreError;
use snipvault_core::import::validate_import;
use snipvault_core::keys;
use snipvault_core::models::snippet::{SaveTarget, Snippet, SnippetDraft};

use crate::error::StorageError;
use crate::kv::KeyValueStore;
use crate::state::{load_state_or_default, save_state};

/// The ordered snippet collection plus the backend it is persisted to.
///
/// Every mutation rewrites the whole collection under [`keys::SNIPPETS`].
pub struct SnippetStore<S> {
    backend: S,
    snippets: Vec<Snippet>,
}

impl<S: KeyValueStore> SnippetStore<S> {
    /// Load the persisted collection. Missing or unreadable data is an
    /// empty store, never an error.
    pub fn open(backend: S) -> Self {
        let snippets = load(&backend);
        tracing::info!(count = snippets.len(), "snippet store opened");
        Self { backend, snippets }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Create or update depending on `target`.
    pub fn save(
        &mut self,
        target: SaveTarget,
        draft: SnippetDraft,
    ) -> Result<&Snippet, StorageError> {
        match target {
            SaveTarget::Create => self.create(draft),
            SaveTarget::Update(id) => self.update(&id, draft),
        }
    }

    pub fn create(&mut self, draft: SnippetDraft) -> Result<&Snippet, StorageError> {
        let draft = draft.normalized();
        draft.validate()?;

        let snippet = Snippet::from_draft(draft, jiff::Timestamp::now());
        let id = snippet.id.clone();
        self.snippets.push(snippet);
        self.persist_or_revert(|snippets| {
            snippets.pop();
        })?;
        tracing::info!(%id, "snippet created");

        let idx = self.snippets.len() - 1;
        Ok(&self.snippets[idx])
    }

    pub fn update(&mut self, id: &str, draft: SnippetDraft) -> Result<&Snippet, StorageError> {
        let idx = self
            .snippets
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;

        let draft = draft.normalized();
        draft.validate()?;

        let previous = self.snippets[idx].clone();
        self.snippets[idx].apply_draft(draft, jiff::Timestamp::now());
        self.persist_or_revert(|snippets| snippets[idx] = previous)?;
        tracing::info!(id, "snippet updated");

        Ok(&self.snippets[idx])
    }

    /// Remove the snippet with `id`. Returns `false` if there was no such
    /// snippet; the stored collection is then left as it is rather than
    /// rewritten unchanged.
    pub fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(idx) = self.snippets.iter().position(|s| s.id == id) else {
            tracing::debug!(id, "delete of unknown snippet ignored");
            return Ok(false);
        };
        let removed = self.snippets.remove(idx);
        self.persist_or_revert(|snippets| snippets.insert(idx, removed))?;
        tracing::info!(id, "snippet deleted");
        Ok(true)
    }

    /// Append every valid record from an import file, each with a fresh id
    /// and fresh timestamps. Returns how many were added.
    pub fn import_batch(&mut self, value: &Value) -> Result<usize, StorageError> {
        let drafts = validate_import(value)?;
        let count = drafts.len();

        let before = self.snippets.len();
        let now = jiff::Timestamp::now();
        self.snippets.extend(
            drafts
                .into_iter()
                .map(|draft| Snippet::from_draft(draft, now)),
        );
        self.persist_or_revert(|snippets| snippets.truncate(before))?;
        tracing::info!(count, "snippets imported");

        Ok(count)
    }

    /// A snapshot of the whole collection for serialization.
    pub fn export_all(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Write the collection. On failure `revert` undoes the pending change so
    /// memory keeps matching what is stored.
    fn persist_or_revert(
        &mut self,
        revert: impl FnOnce(&mut Vec<Snippet>),
    ) -> Result<(), StorageError> {
        if let Err(e) = save_state(&mut self.backend, keys::SNIPPETS, &self.snippets) {
            revert(&mut self.snippets);
            tracing::warn!(error = %e, "snippet collection not saved, change reverted");
            return Err(e);
        }
        Ok(())
    }
}

/// Read the persisted collection, treating any failure as "no data".
pub fn load(backend: &impl KeyValueStore) -> Vec<Snippet> {
    load_state_or_default(backend, keys::SNIPPETS)
}
