//! Subcommand implementations.

/// One-shot question handler.
pub mod ask;

/// Interactive session command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Provider listing command handler.
pub mod providers;

/// Schema printing command handler.
pub mod schema;
