pub mod language;
pub mod snippet;
pub mod theme;
