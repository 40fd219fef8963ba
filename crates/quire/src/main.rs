//! Quire CLI - static-site support tools.
//!
//! Provides commands for:
//! - `config`: Load a configuration file with its inherited parents
//! - `relpath`: Compute a relative URL between two site paths
//! - `link`: Normalize a link for the page it appears on
//! - `page`: Show the URL and front matter of a Markdown page

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, LinkArgs, PageArgs, RelpathArgs};
use output::Output;

/// Quire - static-site support tools.
#[derive(Parser)]
#[command(name = "quire", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a configuration file and print the merged result.
    Config(ConfigArgs),
    /// Print the URL of a site path relative to a page.
    Relpath(RelpathArgs),
    /// Normalize a link for the page it appears on.
    Link(LinkArgs),
    /// Show the output URL, title and front matter of a Markdown page.
    Page(PageArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Config(args) => args.execute(&output),
        Commands::Relpath(args) => args.execute(&output),
        Commands::Link(args) => args.execute(&output),
        Commands::Page(args) => args.execute(&output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
