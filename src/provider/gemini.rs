use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::registry::ProviderKind;
use super::{AdapterSettings, ProviderAdapter, build_client, response_text};
use crate::config::ProviderConfig;
use crate::error::{ProviderError, TranslationError};

const PROVIDER: &str = "gemini";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Adapter for the Gemini `generateContent` API.
pub struct GeminiAdapter {
    client: Client,
    settings: AdapterSettings,
}

impl GeminiAdapter {
    /// Validates the credential and builds the HTTP client.
    pub fn configure(config: Option<&ProviderConfig>) -> Result<Self, ProviderError> {
        let settings = AdapterSettings::resolve(ProviderKind::Gemini, config)?;
        let client = build_client(ProviderKind::Gemini)?;
        Ok(Self { client, settings })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.endpoint, self.settings.model
        )
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.settings.max_tokens,
            },
        }
    }
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
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
            .header("x-goog-api-key", self.settings.api_key.as_str())
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

/// Pulls the first text part of the first candidate out of a response body.
///
/// Blocked prompts come back without candidates and count as no completion.
fn extract_completion(body: &str) -> Result<String, TranslationError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|source| TranslationError::MalformedResponse {
            provider: PROVIDER,
            source,
        })?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .filter(|text| !text.trim().is_empty())
        .ok_or(TranslationError::EmptyCompletion { provider: PROVIDER })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::provider::test_server;

    fn create_test_adapter() -> GeminiAdapter {
        GeminiAdapter::configure(Some(&ProviderConfig {
            api_key: Some("g-test".to_string()),
            ..ProviderConfig::default()
        }))
        .unwrap()
    }

    #[test]
    fn test_configure_requires_credential() {
        assert!(matches!(
            GeminiAdapter::configure(None),
            Err(ProviderError::MissingCredential { provider: "gemini" })
        ));

        let blank = ProviderConfig {
            api_key: Some(String::new()),
            ..ProviderConfig::default()
        };
        assert!(matches!(
            GeminiAdapter::configure(Some(&blank)),
            Err(ProviderError::MissingCredential { provider: "gemini" })
        ));
    }

    #[test]
    fn test_url_includes_model() {
        assert_eq!(
            create_test_adapter().url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let adapter = create_test_adapter();

        let body = serde_json::to_value(adapter.request_body("the prompt")).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "the prompt");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 512);
    }

    #[test]
    fn test_extract_completion() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "```sql\nSELECT 1;\n```\n"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 120}
        }"#;
        assert_eq!(extract_completion(body).unwrap(), "```sql\nSELECT 1;\n```\n");
    }

    #[test]
    fn test_extract_completion_blocked_prompt() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert!(matches!(
            extract_completion(body),
            Err(TranslationError::EmptyCompletion { .. })
        ));
    }

    #[test]
    fn test_extract_completion_candidate_without_content() {
        let body = r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#;
        assert!(matches!(
            extract_completion(body),
            Err(TranslationError::EmptyCompletion { .. })
        ));
    }

    #[test]
    fn test_extract_completion_malformed() {
        assert!(matches!(
            extract_completion("not json"),
            Err(TranslationError::MalformedResponse { .. })
        ));
    }

    fn adapter_at(endpoint: String) -> GeminiAdapter {
        let config = ProviderConfig {
            api_key: Some("g-test".to_string()),
            endpoint: Some(endpoint),
            ..ProviderConfig::default()
        };
        GeminiAdapter {
            client: test_server::direct_client(),
            settings: AdapterSettings::resolve(ProviderKind::Gemini, Some(&config)).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_translate_over_http() {
        let (endpoint, request) = test_server::respond_once(
            "200 OK",
            r#"{"candidates": [{"content": {"parts": [{"text": "```sql\nSELECT MAX(Close) FROM AAPL_daily;\n```"}]}}]}"#,
        )
        .await;
        let adapter = adapter_at(endpoint);

        let query = adapter
            .translate_to_query("highest close", "Table: AAPL_daily", "2024")
            .await
            .unwrap();
        assert_eq!(query, "SELECT MAX(Close) FROM AAPL_daily;");

        let request = request.await.unwrap();
        assert!(request.starts_with(
            "POST /v1beta/models/gemini-1.5-flash:generateContent HTTP/1.1\r\n"
        ));
        let lowered = request.to_ascii_lowercase();
        assert!(lowered.contains("\r\nx-goog-api-key: g-test\r\n"));
        assert!(lowered.contains("\r\ncontent-type: application/json\r\n"));

        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert!(
            body["contents"][0]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("highest close")
        );
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 512);
    }

    #[tokio::test]
    async fn test_error_status_over_http() {
        let (endpoint, request) = test_server::respond_once(
            "429 Too Many Requests",
            r#"{"error": {"code": 429, "status": "RESOURCE_EXHAUSTED"}}"#,
        )
        .await;

        let result = adapter_at(endpoint).complete("prompt").await;
        request.await.unwrap();

        match result {
            Err(TranslationError::Status {
                provider,
                status,
                body,
            }) => {
                assert_eq!(provider, "gemini");
                assert_eq!(status, reqwest::StatusCode::TOO_MANY_REQUESTS);
                assert!(body.contains("RESOURCE_EXHAUSTED"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }
}
