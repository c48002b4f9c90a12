use tracing::debug;

use crate::error::TranslationError;
use crate::provider::{PricePrediction, ProviderAdapter};

/// Result of one translation: a query, or the reason there is none.
#[derive(Debug)]
pub enum TranslationOutcome {
    Query(String),
    NoQuery(TranslationError),
}

impl TranslationOutcome {
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Query(query) => Some(query),
            Self::NoQuery(_) => None,
        }
    }
}

/// Translates questions about the dataset with the selected provider.
pub struct QueryTranslator {
    adapter: Box<dyn ProviderAdapter>,
    schema: String,
}

impl QueryTranslator {
    pub fn new(adapter: Box<dyn ProviderAdapter>, schema: impl Into<String>) -> Self {
        Self {
            adapter,
            schema: schema.into(),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.adapter.name()
    }

    pub fn model(&self) -> &str {
        self.adapter.model()
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Never fails: backend errors and blank output both become [`TranslationOutcome::NoQuery`].
    pub async fn translate(&self, question: &str, date_hint: &str) -> TranslationOutcome {
        match self
            .adapter
            .translate_to_query(question, &self.schema, date_hint)
            .await
        {
            Ok(query) if query.trim().is_empty() => {
                debug!(provider = self.provider_name(), "provider returned an empty query");
                TranslationOutcome::NoQuery(TranslationError::EmptyCompletion {
                    provider: self.provider_name(),
                })
            }
            Ok(query) => TranslationOutcome::Query(query),
            Err(err) => {
                debug!(provider = self.provider_name(), error = %err, "translation failed");
                TranslationOutcome::NoQuery(err)
            }
        }
    }

    pub fn forecast(&self) -> PricePrediction {
        self.adapter.mock_forecast()
    }
}
