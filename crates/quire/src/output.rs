//! Terminal output: results on stdout, messages on stderr.

use console::{Style, Term};
use serde::Serialize;

use crate::commands::Format;
use crate::error::CliError;

/// Terminal output formatter.
pub(crate) struct Output {
    out: Term,
    term: Term,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            term: Term::stderr(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print a command result to stdout.
    pub(crate) fn result(&self, text: &str) -> Result<(), CliError> {
        self.out.write_line(text.trim_end_matches('\n'))?;
        Ok(())
    }

    /// Print a value to stdout as YAML or pretty JSON.
    pub(crate) fn value<T: Serialize + ?Sized>(
        &self,
        value: &T,
        format: Format,
    ) -> Result<(), CliError> {
        let text = match format {
            Format::Yaml => serde_yaml::to_string(value)?,
            Format::Json => serde_json::to_string_pretty(value)?,
        };
        self.result(&text)
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(msg).to_string());
    }
}
