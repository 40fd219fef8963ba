//! `quire page` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use quire_config::ConfigMap;
use quire_site::{Page, UrlStyle};
use serde::Serialize;

use super::Format;
use crate::error::CliError;
use crate::output::Output;

/// Output URL style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Style {
    /// `guide/install.md` becomes `guide/install/`.
    #[default]
    Directory,
    /// `guide/install.md` becomes `guide/install.html`.
    File,
}

impl From<Style> for UrlStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Directory => UrlStyle::Directory,
            Style::File => UrlStyle::File,
        }
    }
}

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Markdown source, relative to the docs directory.
    src_path: String,

    /// Documentation source directory.
    #[arg(long, default_value = "docs")]
    docs_dir: PathBuf,

    /// Output URL style.
    #[arg(short, long, value_enum, default_value_t)]
    style: Style,

    /// Rendered HTML of the page; its links are rewritten and printed.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

/// Summary of a page for structured output.
#[derive(Serialize)]
struct PageSummary<'a> {
    src_path: &'a str,
    url: &'a str,
    title: Option<&'a str>,
    meta: &'a ConfigMap,
}

impl<'a> From<&'a Page> for PageSummary<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            src_path: page.src_path(),
            url: page.url(),
            title: page.title(),
            meta: page.meta(),
        }
    }
}

impl PageArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let page = Page::read(&self.docs_dir, &self.src_path, self.style.into())?;

        if let Some(html_path) = &self.html {
            let html = std::fs::read_to_string(html_path)?;
            output.highlight(&format!("Links rewritten for {}", page.url()));
            return output.result(&page.rewrite_links(&html));
        }

        output.value(&PageSummary::from(&page), self.format)
    }
}
