//! Page model for quire.
//!
//! A [`Page`] is a Markdown source document together with the URL it is
//! written to. Pages know their source directory, so links written by the
//! author relative to the Markdown file keep working once the page is moved
//! to its output location:
//!
//! ```
//! use quire_site::{Page, UrlStyle};
//!
//! let page = Page::from_markdown(
//!     "guide/install.md",
//!     "---\ntitle: Install\n---\nSee [usage](usage.md#cli).\n",
//!     UrlStyle::Directory,
//! );
//! assert_eq!(page.url(), "guide/install/");
//! assert_eq!(page.title(), Some("Install"));
//! assert_eq!(page.resolve_link("usage.md#cli"), "../usage/#cli");
//! assert_eq!(page.resolve_link("img/shot.png"), "../img/shot.png");
//! ```

mod page;
mod url;

pub use page::{Page, PageError};
pub use url::{MARKDOWN_EXTENSIONS, UrlStyle, is_markdown, url_for_source};
