//! Where the configuration file is looked up.

use std::path::{Path, PathBuf};

/// File name used both in the working directory and in the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const APP_DIR: &str = "stockq";

/// Returns the configuration directory for stockq.
///
/// `$XDG_CONFIG_HOME/stockq` when the variable is set and non-empty, else
/// `~/.config/stockq`. Without a home directory this falls back to `./.config/stockq`.
pub fn config_dir() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|xdg| !xdg.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join(APP_DIR)
}

/// Picks the config file when `--config` was not given.
///
/// A `config.toml` in `working_dir` wins over the one in [`config_dir`].
pub fn default_config_file(working_dir: &Path) -> PathBuf {
    let local = working_dir.join(CONFIG_FILE_NAME);
    if local.is_file() {
        local
    } else {
        config_dir().join(CONFIG_FILE_NAME)
    }
}
