use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::fs::atomic_write;
use crate::paths;

/// Dataset used when neither the CLI nor the config file names one.
pub const DEFAULT_DATABASE: &str = "AAPL_daily.db";

/// Settings in the `[default]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultSection {
    /// Name of the provider to use (`gemini`, `openai`).
    pub model_type: Option<String>,
    /// Path to the SQLite dataset.
    pub database: Option<String>,
}

/// Settings for one language-model provider, e.g. the `[openai]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key stored directly in config.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Model override.
    #[serde(default)]
    pub model: Option<String>,
    /// Base URL override, for proxies and compatible servers.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Generation ceiling override.
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl ProviderConfig {
    /// Gets the API key, preferring the environment variable over the config file.
    ///
    /// Blank values count as missing.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.trim().is_empty()
        {
            return Some(key.trim().to_string());
        }
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}

/// The complete configuration file structure.
///
/// ```toml
/// [default]
/// model_type = "gemini"
/// database = "AAPL_daily.db"
///
/// [gemini]
/// api_key = "..."
///
/// [openai]
/// api_key_env = "OPENAI_API_KEY"
/// model = "gpt-3.5-turbo"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub default: DefaultSection,
    /// Every other top-level table is a provider, keyed by name.
    #[serde(flatten)]
    pub providers: BTreeMap<String, ProviderConfig>,
}

impl ConfigFile {
    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.get(name)
    }

    /// Applies CLI overrides on top of the file values.
    pub fn apply(&mut self, options: &ResolveOptions) {
        if let Some(provider) = &options.provider {
            self.default.model_type = Some(provider.clone());
        }

        if let Some(model) = &options.model
            && let Some(name) = self.default.model_type.clone()
        {
            self.providers.entry(name).or_default().model = Some(model.clone());
        }

        if let Some(database) = &options.database {
            self.default.database = Some(database.display().to_string());
        }
    }

    /// Dataset path after overrides, falling back to [`DEFAULT_DATABASE`].
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(
            self.default
                .database
                .as_deref()
                .unwrap_or(DEFAULT_DATABASE),
        )
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub database: Option<PathBuf>,
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the default location.
    ///
    /// `./config.toml` wins when it exists, otherwise
    /// `$XDG_CONFIG_HOME/stockq/config.toml` or `~/.config/stockq/config.toml`.
    pub fn new() -> Self {
        Self {
            config_path: paths::default_config_file(Path::new("")),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// `--config` when given, the default location otherwise.
    pub fn from_option(path: Option<&Path>) -> Self {
        path.map_or_else(Self::new, Self::with_path)
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound {
                path: self.config_path.clone(),
            });
        }

        let contents =
            fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Unreadable {
                path: self.config_path.clone(),
                source,
            })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Malformed {
            path: self.config_path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }

    /// Loads the file for editing: a missing file starts from defaults, but a
    /// file that exists and can't be read or parsed is an error so it is never
    /// overwritten.
    pub fn load_for_update(&self) -> Result<ConfigFile, ConfigError> {
        match self.load() {
            Err(ConfigError::NotFound { .. }) => Ok(ConfigFile::default()),
            other => other,
        }
    }
}
