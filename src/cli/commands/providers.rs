//! Provider listing command handler.

use anyhow::{Result, bail};
use std::path::Path;

use crate::config::{ConfigFile, ConfigManager};
use crate::provider::ProviderKind;
use crate::ui::Style;

/// Prints the supported providers to stdout.
///
/// If `specific_provider` is provided, shows detailed information for that provider.
/// A missing or unreadable config file still lists providers, with nothing marked as set.
pub fn print_providers(config_path: Option<&Path>, specific_provider: Option<&str>) -> Result<()> {
    let config = ConfigManager::from_option(config_path).load_or_default();

    if let Some(name) = specific_provider {
        let Some(kind) = ProviderKind::from_name(name) else {
            bail!(
                "Provider '{name}' is not supported. Supported providers: {}",
                supported_names()
            );
        };
        print_details(&config, kind);
        return Ok(());
    }

    println!("{}\n", Style::header("Supported providers"));
    for kind in ProviderKind::ALL {
        print_summary(&config, kind);
    }

    Ok(())
}

fn supported_names() -> String {
    ProviderKind::ALL
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_default(config: &ConfigFile, kind: ProviderKind) -> bool {
    config.default.model_type.as_deref() == Some(kind.name())
}

fn credential_state(config: &ConfigFile, kind: ProviderKind) -> String {
    let has_key = config
        .provider(kind.name())
        .and_then(|provider| provider.get_api_key())
        .is_some();
    if has_key {
        Style::success("(set)")
    } else {
        Style::warning("(not set)")
    }
}

fn model_for(config: &ConfigFile, kind: ProviderKind) -> String {
    config
        .provider(kind.name())
        .and_then(|provider| provider.model.clone())
        .unwrap_or_else(|| kind.default_model().to_string())
}

fn print_summary(config: &ConfigFile, kind: ProviderKind) {
    println!(
        "  {}{}",
        Style::value(kind.name()),
        if is_default(config, kind) {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    );
    println!("    model:   {}", model_for(config, kind));
    println!("    api_key: {}", credential_state(config, kind));
}

fn print_details(config: &ConfigFile, kind: ProviderKind) {
    let provider = config.provider(kind.name());

    println!(
        "Provider: {} ({}){}",
        Style::value(kind.name()),
        kind.display_name(),
        if is_default(config, kind) {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    );
    println!("  model      = {}", model_for(config, kind));
    println!(
        "  endpoint   = {}",
        provider
            .and_then(|p| p.endpoint.as_deref())
            .unwrap_or_else(|| kind.default_endpoint())
    );
    println!(
        "  max_tokens = {}",
        provider
            .and_then(|p| p.max_tokens)
            .unwrap_or_else(|| kind.default_max_tokens())
    );
    println!("  api_key    = {}", credential_state(config, kind));
    if let Some(env) = provider.and_then(|p| p.api_key_env.as_deref()) {
        println!("  api_key_env = {}", Style::secondary(env));
    }
}
