//! Error taxonomy.
//!
//! Startup errors ([`ConfigError`], [`ProviderError`]) end the process. Request errors
//! ([`TranslationError`], [`ExecutionError`], [`ExportError`]) are reported and the
//! session keeps going.

use std::path::PathBuf;

use thiserror::Error;

/// The configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Configuration file not found: {}\n\n\
         Create it (see 'stockq configure') or pass --config <path>",
        path.display()
    )]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// No usable adapter could be built from the configuration.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(
        "No provider selected\n\n\
         Set 'model_type' in the [default] section or pass --provider <name>"
    )]
    NoProviderSelected,

    #[error("Unsupported model type: {0}\n\nKnown providers: gemini, openai")]
    UnsupportedProvider(String),

    #[error(
        "{provider} API key is missing in the configuration\n\n\
         Set api_key (or api_key_env) in the [{provider}] section"
    )]
    MissingCredential { provider: &'static str },

    #[error("Failed to set up the {provider} client: {source}")]
    Client {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// The backend did not produce a query.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("{provider} request failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{provider} returned an unreadable response: {source}")]
    MalformedResponse {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} returned no usable completion")]
    EmptyCompletion { provider: &'static str },
}

/// Running a query failed.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Rejected by SQLite: bad syntax, unknown table or column, write attempt, and so on.
    #[error("SQL or database error: {0}")]
    Storage(#[source] rusqlite::Error),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl From<rusqlite::Error> for ExecutionError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::Error;

        match err {
            Error::Utf8Error(..)
            | Error::NulError(..)
            | Error::InvalidPath(..)
            | Error::FromSqlConversionFailure(..)
            | Error::ToSqlConversionFailure(..)
            | Error::IntegralValueOutOfRange(..) => Self::Unexpected(err.to_string()),
            other => Self::Storage(other),
        }
    }
}

/// Writing a result file failed.
#[derive(Debug, Error)]
#[error("Failed to export data to {}: {source}", path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
