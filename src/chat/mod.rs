//! Interactive question session.
//!
//! Provides a REPL-style interface with slash commands for inspecting the setup.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::ChatSession;
