//! Printing and exporting request results.

use std::path::Path;

use super::Style;
use crate::context::QueryOutcome;
use crate::dataset::export_csv;
use crate::provider::PricePrediction;

/// How one request ended, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Done,
    NoQuery,
    ExecutionFailed,
    ExportFailed,
}

impl RequestStatus {
    /// Process exit code for one-shot mode.
    pub const fn exit_code(self) -> exitcode::ExitCode {
        match self {
            Self::Done => exitcode::OK,
            Self::NoQuery => exitcode::UNAVAILABLE,
            Self::ExecutionFailed => exitcode::DATAERR,
            Self::ExportFailed => exitcode::CANTCREAT,
        }
    }
}

/// Shows the outcome, or writes the table to `export` instead of printing it.
pub fn deliver(outcome: &QueryOutcome, show_query: bool, export: Option<&Path>) -> RequestStatus {
    if show_query && let Some(query) = outcome.query() {
        print_query(query);
    }

    match outcome {
        QueryOutcome::NoQuery(err) => {
            print_error(&format!("Query handling failed, no query was produced: {err}"));
            RequestStatus::NoQuery
        }
        QueryOutcome::Executed { result: Err(err), .. } => {
            print_error(&err.to_string());
            RequestStatus::ExecutionFailed
        }
        QueryOutcome::Executed {
            result: Ok(table), ..
        } => match export {
            Some(path) => match export_csv(table, path) {
                Ok(()) => {
                    println!(
                        "{} Data exported successfully to {}",
                        Style::success("✓"),
                        Style::value(path.display())
                    );
                    RequestStatus::Done
                }
                Err(err) => {
                    print_error(&err.to_string());
                    RequestStatus::ExportFailed
                }
            },
            None if table.is_empty() && table.columns.is_empty() => {
                println!("{}", Style::secondary("Query returned no result set."));
                RequestStatus::Done
            }
            None => {
                println!("{}", table.render());
                let rows = table.row_count();
                println!(
                    "{}",
                    Style::secondary(format!(
                        "{rows} row{}",
                        if rows == 1 { "" } else { "s" }
                    ))
                );
                RequestStatus::Done
            }
        },
    }
}

pub fn print_query(query: &str) {
    println!("{}", Style::label("Generated SQL query:"));
    println!("{}", Style::query(query));
    println!();
}

pub fn print_forecast(prediction: &PricePrediction) {
    print!("{prediction}");
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}
