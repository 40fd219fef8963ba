//! `quire link` command implementation.

use clap::Args;
use quire_url::{LinkBase, normalize_link_from};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the link command.
#[derive(Args)]
pub(crate) struct LinkArgs {
    /// Link as written (`css/theme.css`, `../faq/#install`, `https://...`).
    link: String,

    /// Output URL of the page the link appears on.
    #[arg(short, long, default_value = "")]
    page: String,

    /// Treat the link as relative to the page's directory instead of the site root.
    #[arg(short, long)]
    document: bool,
}

impl LinkArgs {
    fn base(&self) -> LinkBase {
        if self.document {
            LinkBase::Document
        } else {
            LinkBase::SiteRoot
        }
    }

    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let normalized = normalize_link_from(&self.link, self.page.as_str(), self.base());
        output.result(&normalized)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: LinkArgs,
    }

    #[test]
    fn test_parse_site_root_link() {
        let cli = Cli::try_parse_from(["quire", "css/theme.css", "--page", "guide/"]).unwrap();
        assert_eq!(cli.args.page, "guide/");
        assert_eq!(cli.args.base(), LinkBase::SiteRoot);
    }

    #[test]
    fn test_parse_document_link() {
        let cli = Cli::try_parse_from(["quire", "img/a.png", "-p", "guide/", "-d"]).unwrap();
        assert_eq!(cli.args.base(), LinkBase::Document);
    }
}
