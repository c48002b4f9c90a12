use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, InquireError, Text};
use std::path::PathBuf;
use tracing::debug;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::context::AppContext;
use crate::ui::{Spinner, deliver, print_error, print_forecast};

const DATE_HELP: &str = "If using specific dates, follow YYYY-MM-DD";

/// Why a request stopped before it finished.
#[derive(Debug)]
enum Stop {
    /// Esc: drop this request, keep the session.
    Abandon,
    /// Ctrl+C: end the session.
    Quit,
    /// The terminal itself failed.
    Prompt(InquireError),
}

impl From<InquireError> for Stop {
    fn from(err: InquireError) -> Self {
        match err {
            InquireError::OperationCanceled => Self::Abandon,
            InquireError::OperationInterrupted => Self::Quit,
            other => Self::Prompt(other),
        }
    }
}

/// Interactive question loop over one [`AppContext`].
///
/// Every request runs to completion before the next prompt. Failed requests
/// are reported and the loop continues; only Ctrl+C or `/quit` end it.
pub struct ChatSession {
    context: AppContext,
    show_query: bool,
    render_config: RenderConfig<'static>,
}

impl ChatSession {
    pub fn new(context: AppContext, show_query: bool) -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self {
            context,
            show_query,
            render_config,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.context);

        loop {
            let input = Text::new("Ask a question about the stock data:")
                .with_render_config(self.render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("/help for commands, Ctrl+C to quit")
                .prompt();

            let line = match input.map_err(Stop::from) {
                Ok(line) => line,
                Err(Stop::Abandon) => continue,
                Err(Stop::Quit) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(Stop::Prompt(err)) => return Err(err.into()),
            };

            match parse_input(&line) {
                Input::Empty => {}
                Input::Command(cmd) => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                Input::Question(question) => match self.handle_question(&question).await {
                    Ok(()) => {}
                    Err(Stop::Abandon) => {
                        debug!("request abandoned");
                        println!();
                    }
                    Err(Stop::Quit) => {
                        println!();
                        break;
                    }
                    Err(Stop::Prompt(err)) => return Err(err.into()),
                },
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.context, self.show_query),
            SlashCommand::Forecast => {
                print_forecast(&self.context.forecast());
                println!();
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Schema => ui::print_schema(self.context.schema()),
            SlashCommand::ToggleSql => {
                self.show_query = !self.show_query;
                ui::print_sql_toggle(self.show_query);
            }
            SlashCommand::Unknown(cmd) => {
                print_error(&format!("Unknown command: /{cmd}"));
                eprintln!();
            }
        }
        true
    }

    /// Runs one request: dates, export choice, query, forecast choice.
    async fn handle_question(&self, question: &str) -> Result<(), Stop> {
        let dates = Text::new("Date range (optional):")
            .with_render_config(self.render_config)
            .with_help_message(DATE_HELP)
            .prompt()?;

        let export = self.prompt_export_path()?;

        let outcome = Spinner::while_waiting(
            "Generating query...",
            self.context.run_query(question, &dates),
        )
        .await;
        deliver(&outcome, self.show_query, export.as_deref());
        println!();

        let forecast = Confirm::new("Show the price predictions for the next three days?")
            .with_render_config(self.render_config)
            .with_default(false)
            .prompt()?;
        if forecast {
            print_forecast(&self.context.forecast());
            println!();
        }

        Ok(())
    }

    fn prompt_export_path(&self) -> Result<Option<PathBuf>, Stop> {
        let export = Confirm::new("Export the result to CSV?")
            .with_render_config(self.render_config)
            .with_default(false)
            .prompt()?;
        if !export {
            return Ok(None);
        }

        let path = Text::new("File path:")
            .with_render_config(self.render_config)
            .with_help_message("e.g. results.csv")
            .prompt()?;
        let path = path.trim();
        if path.is_empty() {
            ui::print_export_skipped();
            return Ok(None);
        }
        Ok(Some(PathBuf::from(path)))
    }
}
