//! `quire relpath` command implementation.

use clap::Args;
use quire_url::relative_url;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the relpath command.
#[derive(Args)]
pub(crate) struct RelpathArgs {
    /// Site path to link to.
    target: String,

    /// Site path of the page the link appears on.
    from: String,
}

impl RelpathArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        output.result(&relative_url(&self.target, &self.from))
    }
}
