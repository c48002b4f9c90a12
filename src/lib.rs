//! # stockq - Natural-language questions over daily stock prices
//!
//! `stockq` turns a question like "show me the highest closing price in January"
//! into SQL with a language-model provider, runs it against a local SQLite
//! dataset of daily `AAPL` prices, and prints or exports the result.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session
//! stockq
//!
//! # One question, result as CSV
//! stockq ask "average volume per month" --dates "2024-01-01 to 2024-06-30" -o volume.csv
//!
//! # See which providers are ready
//! stockq providers
//! ```
//!
//! ## Configuration
//!
//! Settings live in `./config.toml` or `~/.config/stockq/config.toml`:
//!
//! ```toml
//! [default]
//! model_type = "gemini"
//! database = "AAPL_daily.db"
//!
//! [gemini]
//! api_key_env = "GEMINI_API_KEY"
//!
//! [openai]
//! api_key = "sk-..."
//! model = "gpt-3.5-turbo"
//! ```

/// Interactive question session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Startup wiring shared by every command that answers questions.
pub mod context;

/// The SQLite dataset: schema, query execution and CSV export.
pub mod dataset;

/// Error taxonomy.
pub mod error;

/// File system utilities.
pub mod fs;

/// Question input from stdin.
pub mod input;

/// `tracing` subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Language-model providers and the mock forecast.
pub mod provider;

/// Question to query translation.
pub mod translation;

/// Terminal UI components (spinner, colors, result output).
pub mod ui;
