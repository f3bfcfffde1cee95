//! snipvault-export
//!
//! JSON export/import files, the HTML snippet page, and HTML previews.

pub mod error;
pub mod json;
pub mod preview;
pub mod render;
pub mod styles;
