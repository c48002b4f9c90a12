//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive (e.g. `stockq_cli=debug`).
pub const LOG_ENV: &str = "STOCKQ_LOG";

/// Level used when `STOCKQ_LOG` is unset or invalid.
pub const fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs the global subscriber. Logs go to stderr so query output on stdout stays clean.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), "warn");
        assert_eq!(default_level(true), "debug");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
