//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use std::fmt;
use std::path::Path;

use crate::config::{ConfigFile, ConfigManager};
use crate::provider::ProviderKind;
use crate::ui::{Style, handle_prompt_cancellation};

const KEY_IN_FILE: &str = "Store the key in the config file";
const KEY_FROM_ENV: &str = "Read the key from an environment variable";
const KEY_UNCHANGED: &str = "Keep the current key";

/// Wrapper so `Select` shows "gemini (Gemini)".
struct ProviderChoice(ProviderKind);

impl fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.name(), self.0.display_name())
    }
}

/// Runs the configure command to edit default settings.
///
/// Allows the user to interactively set the default provider, its model and its credential.
pub fn run_configure(config_path: Option<&Path>) -> Result<()> {
    handle_prompt_cancellation(|| run_configure_inner(config_path))
}

fn run_configure_inner(config_path: Option<&Path>) -> Result<()> {
    let manager = ConfigManager::from_option(config_path);
    let mut config = manager.load_for_update()?;

    print_current_defaults(&config);

    let kind = select_provider(config.default.model_type.as_deref())?;
    let current = config.provider(kind.name()).cloned().unwrap_or_default();

    let model = Text::new("Model:")
        .with_default(current.model.as_deref().unwrap_or_else(|| kind.default_model()))
        .prompt()?;
    let model = model.trim();
    if model.is_empty() {
        bail!("Model name cannot be empty");
    }

    let has_key = current.get_api_key().is_some();
    let mut options = vec![KEY_IN_FILE, KEY_FROM_ENV];
    if has_key {
        options.insert(0, KEY_UNCHANGED);
    }
    let key_source = Select::new("API key:", options).prompt()?;

    let entry = config.providers.entry(kind.name().to_string()).or_default();
    entry.model = (model != kind.default_model()).then(|| model.to_string());

    match key_source {
        KEY_IN_FILE => {
            let key = Password::new(&format!("{} API key:", kind.display_name()))
                .with_display_mode(PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()?;
            if key.trim().is_empty() {
                bail!("API key cannot be empty");
            }
            entry.api_key = Some(key.trim().to_string());
            entry.api_key_env = None;
        }
        KEY_FROM_ENV => {
            let default_var = format!("{}_API_KEY", kind.name().to_uppercase());
            let var = Text::new("Environment variable:")
                .with_default(&default_var)
                .prompt()?;
            if var.trim().is_empty() {
                bail!("Environment variable name cannot be empty");
            }
            entry.api_key_env = Some(var.trim().to_string());
            entry.api_key = None;
        }
        _ => {}
    }

    config.default.model_type = Some(kind.name().to_string());
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("provider"),
        config
            .default
            .model_type
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("database"),
        Style::value(config.database_path().display())
    );
    println!();
}

fn select_provider(default: Option<&str>) -> Result<ProviderKind> {
    let default_index = default
        .and_then(|d| ProviderKind::ALL.iter().position(|kind| kind.name() == d))
        .unwrap_or(0);

    let choices = ProviderKind::ALL.into_iter().map(ProviderChoice).collect();
    let selection = Select::new("Default provider:", choices)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_choice_display() {
        assert_eq!(ProviderChoice(ProviderKind::Gemini).to_string(), "gemini (Gemini)");
        assert_eq!(ProviderChoice(ProviderKind::OpenAi).to_string(), "openai (OpenAI)");
    }
}
