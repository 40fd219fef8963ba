//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod link;
pub(crate) mod page;
pub(crate) mod relpath;

use clap::ValueEnum;

pub(crate) use config::ConfigArgs;
pub(crate) use link::LinkArgs;
pub(crate) use page::PageArgs;
pub(crate) use relpath::RelpathArgs;

/// Output format for structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Yaml,
    Json,
}
