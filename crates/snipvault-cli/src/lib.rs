//! snipvault-cli library root.
//!
//! The command-line modules, public so `tests/` can drive
//! [`commands::run_with`] without spawning the binary.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod prompt;
