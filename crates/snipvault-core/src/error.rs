use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {field}")]
    Validation { field: &'static str },

    #[error("snippet not found: {id}")]
    NotFound { id: String },

    #[error("invalid file format: {0}")]
    Format(String),

    #[error("no valid snippets found in file")]
    EmptyImport,
}
