//! Chat mode UI components.

use crate::context::AppContext;
use crate::ui::Style;

use super::command::SLASH_COMMANDS;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(context: &AppContext) {
    println!(
        "{} {} - Ask questions about {}",
        Style::header("stockq"),
        Style::version(format!("v{VERSION}")),
        Style::value(crate::dataset::TABLE_NAME)
    );
    println!(
        "{}",
        Style::secondary(format!("{} · {}", context.provider_name(), context.model()))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(context: &AppContext, show_query: bool) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(context.provider_name())
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(context.model())
    );
    println!(
        "  {}   {}",
        Style::label("database"),
        Style::secondary(context.database().display())
    );
    println!(
        "  {}        {}",
        Style::label("sql"),
        Style::value(if show_query { "shown" } else { "hidden" })
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (command, description) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{command:<10}")),
            Style::secondary(description)
        );
    }
    println!();
    println!(
        "{}",
        Style::secondary("Anything else is a question. Esc skips the current question.")
    );
    println!();
}

pub fn print_schema(schema: &str) {
    println!("{}", Style::header("Schema"));
    for line in schema.lines() {
        println!("  {line}");
    }
    println!();
}

pub fn print_sql_toggle(show_query: bool) {
    let state = if show_query { "on" } else { "off" };
    println!(
        "{} Generated SQL display {}",
        Style::success("✓"),
        Style::value(state)
    );
    println!();
}

pub fn print_export_skipped() {
    println!("{}", Style::warning("No file path provided. Skipping export."));
}
