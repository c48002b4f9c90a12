use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ResolveOptions;

#[derive(Parser, Debug)]
#[command(name = "stockq")]
#[command(about = "Ask natural-language questions about daily stock prices")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every subcommand.
#[derive(ClapArgs, Debug, Default)]
pub struct GlobalArgs {
    /// Configuration file (default: ./config.toml, then ~/.config/stockq/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Provider name, overrides default.model_type (gemini, openai)
    #[arg(short = 'p', long, global = true)]
    pub provider: Option<String>,

    /// Model name for the selected provider
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// SQLite dataset to query
    #[arg(short = 'd', long, global = true)]
    pub database: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            provider: self.provider.clone(),
            model: self.model.clone(),
            database: self.database.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer one question and exit
    Ask {
        /// The question (reads from stdin if not provided)
        question: Option<String>,

        /// Date range hint, e.g. "2024-01-01 to 2024-01-31"
        #[arg(long, default_value = "")]
        dates: String,

        /// Write the result to a CSV file instead of printing it
        #[arg(short = 'o', long)]
        export: Option<PathBuf>,

        /// Also print the mock three-day price prediction
        #[arg(short = 'f', long)]
        forecast: bool,

        /// Print the generated SQL
        #[arg(short = 's', long)]
        show_query: bool,
    },
    /// Interactive question session (default)
    Chat {
        /// Print the generated SQL
        #[arg(short = 's', long)]
        show_query: bool,
    },
    /// List supported providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Show the dataset schema sent to the provider
    Schema,
    /// Configure the default provider and credential
    Configure,
}
