//! Key conventions for the durable key-value store.
//!
//! Pure string constants. Both keys hold JSON documents.

/// The full snippet collection, serialized as one JSON array.
pub const SNIPPETS: &str = "codeSnippets";

/// The current theme name (`"light"` or `"dark"`).
pub const THEME: &str = "theme";
