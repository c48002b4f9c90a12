use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::registry::ProviderKind;
use super::{AdapterSettings, ProviderAdapter, build_client, response_text};
use crate::config::ProviderConfig;
use crate::error::{ProviderError, TranslationError};

const PROVIDER: &str = "openai";
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Adapter for the OpenAI chat completions API (and compatible servers).
pub struct OpenAiAdapter {
    client: Client,
    settings: AdapterSettings,
}

impl OpenAiAdapter {
    /// Validates the credential and builds the HTTP client.
    pub fn configure(config: Option<&ProviderConfig>) -> Result<Self, ProviderError> {
        let settings = AdapterSettings::resolve(ProviderKind::OpenAi, config)?;
        let client = build_client(ProviderKind::OpenAi)?;
        Ok(Self { client, settings })
    }

    fn url(&self) -> String {
        format!("{}/v1/chat/completions", self.settings.endpoint)
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.settings.model,
            messages: [
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.settings.max_tokens,
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    #[instrument(skip(self, prompt), fields(provider = PROVIDER, model = %self.settings.model))]
    async fn complete(&self, prompt: &str) -> Result<String, TranslationError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(&self.settings.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|source| TranslationError::Request {
                provider: PROVIDER,
                source,
            })?;

        let body = response_text(PROVIDER, response).await?;
        extract_completion(&body)
    }
}

/// Pulls the first choice's message text out of a response body.
fn extract_completion(body: &str) -> Result<String, TranslationError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|source| TranslationError::MalformedResponse {
            provider: PROVIDER,
            source,
        })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(TranslationError::EmptyCompletion { provider: PROVIDER })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::provider::test_server;

    fn create_test_adapter() -> OpenAiAdapter {
        OpenAiAdapter::configure(Some(&ProviderConfig {
            api_key: Some("sk-test".to_string()),
            ..ProviderConfig::default()
        }))
        .unwrap()
    }

    #[test]
    fn test_configure_requires_credential() {
        let result = OpenAiAdapter::configure(Some(&ProviderConfig::default()));
        assert!(matches!(
            result,
            Err(ProviderError::MissingCredential { provider: "openai" })
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let adapter = create_test_adapter();

        let body = serde_json::to_value(adapter.request_body("the prompt")).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 150);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "the prompt");
    }

    #[test]
    fn test_url() {
        assert_eq!(
            create_test_adapter().url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_extract_completion() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "```sql\nSELECT 1;\n```"}},
                {"index": 1, "message": {"role": "assistant", "content": "SELECT 2;"}}
            ]
        }"#;
        assert_eq!(extract_completion(body).unwrap(), "```sql\nSELECT 1;\n```");
    }

    #[test]
    fn test_extract_completion_without_choices() {
        let result = extract_completion(r#"{"choices": []}"#);
        assert!(matches!(
            result,
            Err(TranslationError::EmptyCompletion { .. })
        ));
    }

    #[test]
    fn test_extract_completion_null_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert!(matches!(
            extract_completion(body),
            Err(TranslationError::EmptyCompletion { .. })
        ));
    }

    #[test]
    fn test_extract_completion_malformed() {
        assert!(matches!(
            extract_completion("<html>bad gateway</html>"),
            Err(TranslationError::MalformedResponse { .. })
        ));
    }

    fn adapter_at(endpoint: String) -> OpenAiAdapter {
        let config = ProviderConfig {
            api_key: Some("sk-test".to_string()),
            endpoint: Some(endpoint),
            ..ProviderConfig::default()
        };
        OpenAiAdapter {
            client: test_server::direct_client(),
            settings: AdapterSettings::resolve(ProviderKind::OpenAi, Some(&config)).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_translate_over_http() {
        let (endpoint, request) = test_server::respond_once(
            "200 OK",
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "```sql\nSELECT COUNT(*) FROM AAPL_daily;\n```"}}]}"#,
        )
        .await;
        let adapter = adapter_at(endpoint);

        let query = adapter
            .translate_to_query("how many days", "Table: AAPL_daily", "")
            .await
            .unwrap();
        assert_eq!(query, "SELECT COUNT(*) FROM AAPL_daily;");

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions HTTP/1.1\r\n"));
        assert!(
            request
                .to_ascii_lowercase()
                .contains("\r\nauthorization: bearer sk-test\r\n")
        );

        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 150);
        assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
        assert!(
            body["messages"][1]["content"]
                .as_str()
                .unwrap()
                .contains("how many days")
        );
    }

    #[tokio::test]
    async fn test_error_status_over_http() {
        let (endpoint, request) = test_server::respond_once(
            "429 Too Many Requests",
            r#"{"error": {"message": "Rate limit reached", "type": "requests"}}"#,
        )
        .await;

        let result = adapter_at(endpoint).complete("prompt").await;
        request.await.unwrap();

        assert!(matches!(
            result,
            Err(TranslationError::Status { provider: "openai", status, .. })
                if status == reqwest::StatusCode::TOO_MANY_REQUESTS
        ));
    }
}
