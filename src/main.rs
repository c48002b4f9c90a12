use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use stockq_cli::cli::commands::{ask, chat, configure, providers, schema};
use stockq_cli::cli::{Args, Command};
use stockq_cli::context::AppContext;
use stockq_cli::error::{ConfigError, ProviderError};
use stockq_cli::{logging, ui};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.global.verbose);

    match run(args).await {
        Ok(code) => exit_code(code),
        Err(err) => {
            ui::print_error(&format!("{err:#}"));
            exit_code(failure_code(&err))
        }
    }
}

async fn run(args: Args) -> Result<exitcode::ExitCode> {
    let config_path = args.global.config.as_deref();

    match args.command {
        Some(Command::Providers { provider }) => {
            providers::print_providers(config_path, provider.as_deref())?;
        }
        Some(Command::Schema) => schema::print_schema(),
        Some(Command::Configure) => configure::run_configure(config_path)?,
        Some(Command::Ask {
            question,
            dates,
            export,
            forecast,
            show_query,
        }) => {
            let context = AppContext::initialize(config_path, &args.global.resolve_options())?;
            let options = ask::AskOptions {
                question,
                dates,
                export,
                forecast,
                show_query,
            };
            return ask::run_ask(&context, options).await;
        }
        Some(Command::Chat { show_query }) => {
            let context = AppContext::initialize(config_path, &args.global.resolve_options())?;
            chat::run_chat(context, show_query).await?;
        }
        None => {
            let context = AppContext::initialize(config_path, &args.global.resolve_options())?;
            chat::run_chat(context, false).await?;
        }
    }

    Ok(exitcode::OK)
}

/// Maps a fatal error to a sysexits code by its root cause.
fn failure_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.downcast_ref::<ConfigError>().is_some() || err.downcast_ref::<ProviderError>().is_some()
    {
        exitcode::CONFIG
    } else if err.downcast_ref::<rusqlite::Error>().is_some() {
        exitcode::NOINPUT
    } else {
        exitcode::SOFTWARE
    }
}

fn exit_code(code: exitcode::ExitCode) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
