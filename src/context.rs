//! Process-wide context built once at startup.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{ConfigManager, ResolveOptions};
use crate::dataset::{ExecutionResult, QueryExecutor, QueryTable, SCHEMA_DESCRIPTION};
use crate::error::TranslationError;
use crate::provider::{PricePrediction, create_handler};
use crate::translation::{QueryTranslator, TranslationOutcome};

/// What happened to one question.
#[derive(Debug)]
pub enum QueryOutcome {
    /// The provider did not produce a query; nothing was executed.
    NoQuery(TranslationError),
    /// A query was produced and run.
    Executed {
        query: String,
        result: ExecutionResult,
    },
}

impl QueryOutcome {
    pub const fn table(&self) -> Option<&QueryTable> {
        match self {
            Self::Executed { result: Ok(table), .. } => Some(table),
            _ => None,
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Executed { query, .. } => Some(query),
            Self::NoQuery(_) => None,
        }
    }
}

/// Everything a request needs: the translator bound to the selected provider
/// and the executor bound to the dataset.
pub struct AppContext {
    translator: QueryTranslator,
    executor: QueryExecutor,
    database: PathBuf,
}

impl AppContext {
    pub const fn new(translator: QueryTranslator, executor: QueryExecutor, database: PathBuf) -> Self {
        Self {
            translator,
            executor,
            database,
        }
    }

    /// Loads the configuration, builds the adapter and opens the dataset.
    ///
    /// Any failure here is fatal for the process.
    pub fn initialize(config_path: Option<&Path>, overrides: &ResolveOptions) -> Result<Self> {
        let manager = ConfigManager::from_option(config_path);
        let mut config = manager.load()?;
        config.apply(overrides);
        info!(path = %manager.config_path().display(), "configuration loaded");

        let adapter = create_handler(&config)?;
        let database = config.database_path();
        let executor = QueryExecutor::open(&database)?;

        Ok(Self::new(
            QueryTranslator::new(adapter, SCHEMA_DESCRIPTION),
            executor,
            database,
        ))
    }

    pub fn provider_name(&self) -> &'static str {
        self.translator.provider_name()
    }

    pub fn model(&self) -> &str {
        self.translator.model()
    }

    pub fn database(&self) -> &Path {
        &self.database
    }

    pub fn schema(&self) -> &str {
        self.translator.schema()
    }

    /// Translates `question` and runs the resulting query.
    pub async fn run_query(&self, question: &str, date_hint: &str) -> QueryOutcome {
        match self.translator.translate(question, date_hint).await {
            TranslationOutcome::NoQuery(err) => QueryOutcome::NoQuery(err),
            TranslationOutcome::Query(query) => {
                let result = self.executor.execute(&query);
                QueryOutcome::Executed { query, result }
            }
        }
    }

    pub fn forecast(&self) -> PricePrediction {
        self.translator.forecast()
    }
}
