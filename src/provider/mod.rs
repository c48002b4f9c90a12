//! Language-model providers behind one adapter contract.
//!
//! Each provider module only knows how to send a prompt and pull the first
//! completion out of its own response shape. Prompt assembly, fence cleanup
//! and the forecast are shared by every provider through [`ProviderAdapter`].

mod forecast;
mod gemini;
mod openai;
mod registry;

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;

use crate::config::ProviderConfig;
use crate::error::{ProviderError, TranslationError};
use crate::translation::{build_query_prompt, strip_code_fences};

pub use forecast::{BASE_PRICE, FORECAST_DAYS, PricePoint, PricePrediction, SUBJECT, mock_forecast};
pub use gemini::GeminiAdapter;
pub use openai::OpenAiAdapter;
pub use registry::{ProviderKind, create_handler};

/// Capability set every language-model backend provides.
///
/// Adapters only exist in the configured state: their constructors validate
/// the credential and build the client, or fail.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Provider name as used in configuration (e.g. "gemini").
    fn name(&self) -> &'static str;

    /// Model the requests go to.
    fn model(&self) -> &str;

    /// Sends `prompt` and returns the first textual completion.
    async fn complete(&self, prompt: &str) -> Result<String, TranslationError>;

    /// Turns a question into query text with fences and surrounding whitespace removed.
    async fn translate_to_query(
        &self,
        question: &str,
        schema: &str,
        date_hint: &str,
    ) -> Result<String, TranslationError> {
        let prompt = build_query_prompt(question, schema, date_hint);
        tracing::debug!(provider = self.name(), %prompt, "sending prompt");

        let completion = self.complete(&prompt).await?;
        tracing::debug!(provider = self.name(), %completion, "raw completion");

        Ok(strip_code_fences(&completion))
    }

    /// Placeholder forecast for the days after today. Never touches the backend.
    fn mock_forecast(&self) -> PricePrediction {
        mock_forecast(Local::now().date_naive())
    }
}

/// Settings an adapter is built from, after defaults and credential checks.
#[derive(Clone)]
pub(crate) struct AdapterSettings {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub max_tokens: u32,
}

impl AdapterSettings {
    pub fn resolve(
        kind: ProviderKind,
        config: Option<&ProviderConfig>,
    ) -> Result<Self, ProviderError> {
        let api_key = config
            .and_then(ProviderConfig::get_api_key)
            .ok_or(ProviderError::MissingCredential {
                provider: kind.name(),
            })?;

        let config = config.cloned().unwrap_or_default();
        Ok(Self {
            api_key,
            model: config
                .model
                .unwrap_or_else(|| kind.default_model().to_string()),
            endpoint: config
                .endpoint
                .unwrap_or_else(|| kind.default_endpoint().to_string())
                .trim_end_matches('/')
                .to_string(),
            max_tokens: config.max_tokens.unwrap_or_else(|| kind.default_max_tokens()),
        })
    }
}

pub(crate) fn build_client(kind: ProviderKind) -> Result<Client, ProviderError> {
    Client::builder()
        .user_agent(concat!("stockq/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|source| ProviderError::Client {
            provider: kind.name(),
            source,
        })
}

/// Reads a response body, turning non-success statuses into errors.
pub(crate) async fn response_text(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<String, TranslationError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| TranslationError::Request { provider, source })?;

    if !status.is_success() {
        return Err(TranslationError::Status {
            provider,
            status,
            body,
        });
    }
    Ok(body)
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct CannedAdapter(&'static str);

    #[async_trait]
    impl ProviderAdapter for CannedAdapter {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-1"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, TranslationError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_translate_to_query_strips_fences() {
        let adapter = CannedAdapter("```sql\nSELECT MAX(Close) FROM AAPL_daily;\n```\n");

        let query = adapter
            .translate_to_query("highest close", "schema", "")
            .await
            .unwrap();

        assert_eq!(query, "SELECT MAX(Close) FROM AAPL_daily;");
    }

    #[test]
    fn test_mock_forecast_ignores_backend() {
        let prediction = CannedAdapter("unused").mock_forecast();

        assert_eq!(prediction.points.len(), 3);
        let today = Local::now().date_naive();
        assert!(prediction.points[0].date > today);
    }

    #[test]
    fn test_resolve_settings_defaults() {
        let config = ProviderConfig {
            api_key: Some("key".to_string()),
            ..ProviderConfig::default()
        };

        let settings = AdapterSettings::resolve(ProviderKind::OpenAi, Some(&config)).unwrap();

        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert_eq!(settings.endpoint, "https://api.openai.com");
        assert_eq!(settings.max_tokens, 150);
    }

    #[test]
    fn test_resolve_settings_overrides() {
        let config = ProviderConfig {
            api_key: Some("key".to_string()),
            model: Some("gemini-2.0-flash".to_string()),
            endpoint: Some("http://localhost:8080/".to_string()),
            max_tokens: Some(64),
            ..ProviderConfig::default()
        };

        let settings = AdapterSettings::resolve(ProviderKind::Gemini, Some(&config)).unwrap();

        assert_eq!(settings.model, "gemini-2.0-flash");
        assert_eq!(settings.endpoint, "http://localhost:8080");
        assert_eq!(settings.max_tokens, 64);
    }

    #[test]
    fn test_resolve_settings_without_section() {
        let result = AdapterSettings::resolve(ProviderKind::Gemini, None);
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredential { provider: "gemini" })
        ));
    }
}
