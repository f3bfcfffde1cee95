//! snipvault-storage
//!
//! Durable key-value backends and the snippet store built on top of them.

pub mod error;
pub mod kv;
pub mod preferences;
pub mod snippets;
pub mod state;
