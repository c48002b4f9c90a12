use anyhow::Result;
use std::path::PathBuf;

use crate::context::AppContext;
use crate::input::InputReader;
use crate::ui::{Spinner, deliver, print_forecast};

pub struct AskOptions {
    pub question: Option<String>,
    pub dates: String,
    pub export: Option<PathBuf>,
    pub forecast: bool,
    pub show_query: bool,
}

/// Answers one question and returns the exit code for how it went.
///
/// Request failures are printed here; only setup problems come back as `Err`.
pub async fn run_ask(context: &AppContext, options: AskOptions) -> Result<exitcode::ExitCode> {
    let question = match options.question {
        Some(question) if !question.trim().is_empty() => question.trim().to_string(),
        _ => InputReader::read_question()?,
    };

    let outcome = Spinner::while_waiting(
        "Generating query...",
        context.run_query(&question, &options.dates),
    )
    .await;
    let status = deliver(&outcome, options.show_query, options.export.as_deref());

    if options.forecast {
        println!();
        print_forecast(&context.forecast());
    }

    Ok(status.exit_code())
}
