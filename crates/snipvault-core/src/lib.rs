//! snipvault-core
//!
//! Pure domain types, validation rules, and storage key conventions.
//! No I/O here. This is the shared vocabulary of the snipvault crates.

pub mod error;
pub mod import;
pub mod keys;
pub mod models;
