//! snipvault-search
//!
//! Query & render engine: substring filtering over the snippet list and
//! cosmetic, rule-based syntax highlighting.

pub mod escape;
pub mod highlight;
pub mod query;
pub mod rules;

pub use highlight::highlight;
pub use query::filter;
