//! Relative URL computation and link normalization for generated pages.
//!
//! Every page of a generated site is written to an output path relative to
//! the site root (its URL). Links and asset references emitted into that page
//! must be relative to the page itself so the site can be served from any
//! prefix or opened straight from disk.
//!
//! - [`relative_url`] computes the shortest relative path between two site paths.
//! - [`normalize_link`] decides whether a raw link is external and, if not,
//!   rewrites it relative to the page it appears on.
//! - [`rewrite_html_links`] applies [`normalize_link`] to every `href`/`src`
//!   attribute of a rendered HTML fragment; [`rewrite_html_links_with`] takes
//!   a custom rewrite function instead.
//!
//! # Example
//!
//! ```
//! use quire_url::{normalize_link, relative_url};
//!
//! assert_eq!(relative_url("css/theme.css", "guide/install/"), "../../css/theme.css");
//! assert_eq!(normalize_link("img/logo.png?v=2", "blog/post.html"), "../img/logo.png?v=2");
//! assert_eq!(normalize_link("https://example.com", "blog/"), "https://example.com");
//! ```

mod html;
mod link;
mod relative;

pub use html::{rewrite_html_links, rewrite_html_links_with};
pub use link::{
    LinkBase, LinkParts, OutputPage, is_external, normalize_link, normalize_link_from, split_link,
};
pub use relative::{normalize_path, relative_url};
