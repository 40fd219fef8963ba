//! Output URLs of source documents.

use quire_url::normalize_path;

/// How Markdown sources map to output files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlStyle {
    /// `guide/install.md` is written to `guide/install/index.html` and linked
    /// as `guide/install/`.
    #[default]
    Directory,
    /// `guide/install.md` is written to `guide/install.html`.
    File,
}

/// File extensions of Markdown sources, matched case-sensitively.
pub const MARKDOWN_EXTENSIONS: [&str; 5] = [".markdown", ".mdown", ".mkdn", ".mkd", ".md"];

/// Check whether a site path names a Markdown source.
pub fn is_markdown(path: &str) -> bool {
    MARKDOWN_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Compute the output URL of a source document.
///
/// Markdown sources are recognized by [`MARKDOWN_EXTENSIONS`].
/// `index.md` and `README.md` stand for their directory. In
/// [`UrlStyle::Directory`] the root index has the empty URL. Paths that are
/// not Markdown sources are returned normalized.
///
/// # Examples
///
/// ```
/// use quire_site::{UrlStyle, url_for_source};
///
/// assert_eq!(url_for_source("guide/install.md", UrlStyle::Directory), "guide/install/");
/// assert_eq!(url_for_source("guide/install.md", UrlStyle::File), "guide/install.html");
/// assert_eq!(url_for_source("guide/README.md", UrlStyle::Directory), "guide/");
/// assert_eq!(url_for_source("index.md", UrlStyle::Directory), "");
/// assert_eq!(url_for_source("img/logo.png", UrlStyle::Directory), "img/logo.png");
/// ```
pub fn url_for_source(src_path: &str, style: UrlStyle) -> String {
    let src = normalize_path(src_path);
    if !is_markdown(&src) {
        return src;
    }

    let stem = src.rsplit_once('.').map_or(src.as_str(), |(stem, _)| stem);
    let (dir, name) = stem.rsplit_once('/').unwrap_or(("", stem));
    let is_index = name == "index" || name == "README";

    match (style, is_index) {
        (UrlStyle::Directory, true) if dir.is_empty() => String::new(),
        (UrlStyle::Directory, true) => format!("{dir}/"),
        (UrlStyle::Directory, false) => format!("{stem}/"),
        (UrlStyle::File, true) if dir.is_empty() => "index.html".to_owned(),
        (UrlStyle::File, true) => format!("{dir}/index.html"),
        (UrlStyle::File, false) => format!("{stem}.html"),
    }
}
