mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_DATABASE, DefaultSection, ProviderConfig, ResolveOptions,
};
