use tracing::info;

use super::{GeminiAdapter, OpenAiAdapter, ProviderAdapter};
use crate::config::ConfigFile;
use crate::error::ProviderError;

/// The closed set of supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Gemini,
    OpenAi,
}

impl ProviderKind {
    pub const ALL: [Self; 2] = [Self::Gemini, Self::OpenAi];

    /// Configuration name, matched case-sensitively.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::OpenAi => "OpenAI",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => "gemini-1.5-flash",
            Self::OpenAi => "gpt-3.5-turbo",
        }
    }

    pub const fn default_endpoint(self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com",
            Self::OpenAi => "https://api.openai.com",
        }
    }

    pub const fn default_max_tokens(self) -> u32 {
        match self {
            Self::Gemini => 512,
            Self::OpenAi => 150,
        }
    }
}

/// Builds the adapter selected by `default.model_type`.
///
/// Unknown names fail before anything is constructed; known providers fail when
/// their credential is missing. No network traffic happens here.
pub fn create_handler(config: &ConfigFile) -> Result<Box<dyn ProviderAdapter>, ProviderError> {
    let name = config
        .default
        .model_type
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(ProviderError::NoProviderSelected)?;

    let kind = ProviderKind::from_name(name)
        .ok_or_else(|| ProviderError::UnsupportedProvider(name.to_string()))?;

    let settings = config.provider(kind.name());
    let adapter: Box<dyn ProviderAdapter> = match kind {
        ProviderKind::Gemini => Box::new(GeminiAdapter::configure(settings)?),
        ProviderKind::OpenAi => Box::new(OpenAiAdapter::configure(settings)?),
    };

    info!(provider = adapter.name(), model = adapter.model(), "provider ready");
    Ok(adapter)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    fn config_for(model_type: &str, provider: &str, api_key: Option<&str>) -> ConfigFile {
        let mut config = ConfigFile::default();
        config.default.model_type = Some(model_type.to_string());
        config.providers.insert(
            provider.to_string(),
            ProviderConfig {
                api_key: api_key.map(str::to_string),
                ..ProviderConfig::default()
            },
        );
        config
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(ProviderKind::from_name("gemini"), Some(ProviderKind::Gemini));
        assert_eq!(ProviderKind::from_name("openai"), Some(ProviderKind::OpenAi));
        assert_eq!(ProviderKind::from_name("Gemini"), None);
        assert_eq!(ProviderKind::from_name("OPENAI"), None);
        assert_eq!(ProviderKind::from_name(""), None);
    }

    #[test]
    fn test_create_gemini_handler() {
        let adapter = create_handler(&config_for("gemini", "gemini", Some("g-key"))).unwrap();
        assert_eq!(adapter.name(), "gemini");
        assert_eq!(adapter.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_create_openai_handler() {
        let adapter = create_handler(&config_for("openai", "openai", Some("sk-key"))).unwrap();
        assert_eq!(adapter.name(), "openai");
        assert_eq!(adapter.model(), "gpt-3.5-turbo");
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result = create_handler(&config_for("claude", "claude", Some("key")));
        match result {
            Err(ProviderError::UnsupportedProvider(name)) => assert_eq!(name, "claude"),
            other => panic!("expected UnsupportedProvider, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_missing_credential_is_rejected() {
        let result = create_handler(&config_for("openai", "openai", Some("")));
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredential { provider: "openai" })
        ));
    }

    #[test]
    fn test_credential_of_other_provider_does_not_count() {
        let result = create_handler(&config_for("gemini", "openai", Some("sk-key")));
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredential { provider: "gemini" })
        ));
    }

    #[test]
    fn test_no_provider_selected() {
        let result = create_handler(&ConfigFile::default());
        assert!(matches!(result, Err(ProviderError::NoProviderSelected)));
    }
}
