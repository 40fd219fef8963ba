//! Link normalization for references emitted into output pages.

use std::borrow::Cow;

use crate::relative::{document_dir, levels_above_root, relative_url};

/// A page that links are rewritten for.
///
/// The URL is the page's output location relative to the site root, e.g.
/// `guide/install/` or `blog/post.html`.
pub trait OutputPage {
    /// Site path the page is written to.
    fn url(&self) -> &str;

    /// Site directory that [`LinkBase::Document`] links are written against.
    ///
    /// Defaults to the directory of [`url`](Self::url). Pages whose output
    /// location differs from their source location override this with the
    /// source directory.
    fn document_dir(&self) -> &str {
        document_dir(self.url())
    }
}

impl OutputPage for str {
    fn url(&self) -> &str {
        self
    }
}

impl OutputPage for String {
    fn url(&self) -> &str {
        self
    }
}

impl<P: OutputPage + ?Sized> OutputPage for &P {
    fn url(&self) -> &str {
        (**self).url()
    }

    fn document_dir(&self) -> &str {
        (**self).document_dir()
    }
}

/// What a site-relative link is written relative to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkBase {
    /// The link is a path from the site root (theme assets, `extra_css`, ...).
    #[default]
    SiteRoot,
    /// The link is a path from the directory of the page it appears on.
    /// Paths starting with `/` are still taken from the site root.
    Document,
}

/// Rewrite a site-root-relative link so it is relative to `page`.
///
/// Equivalent to [`normalize_link_from`] with [`LinkBase::SiteRoot`].
///
/// # Examples
///
/// ```
/// use quire_url::normalize_link;
///
/// assert_eq!(normalize_link("css/theme.css", "guide/"), "../css/theme.css");
/// assert_eq!(normalize_link("#usage", "guide/"), "#usage");
/// assert_eq!(normalize_link("mailto:team@example.com", "guide/"), "mailto:team@example.com");
/// ```
pub fn normalize_link<'a, P: OutputPage + ?Sized>(link: &'a str, page: &P) -> Cow<'a, str> {
    normalize_link_from(link, page, LinkBase::SiteRoot)
}

/// Rewrite a link so it is relative to `page`.
///
/// Empty links, fragment-only links and external links (see [`is_external`])
/// are returned unchanged. A trailing `?query` and/or `#fragment` is kept
/// verbatim and takes no part in the path arithmetic. Backslashes in the path
/// are replaced with `/` after logging a warning.
///
/// A relative link whose `..` segments climb above the site root points
/// outside the site; those levels are kept on top of the page's own depth.
///
/// ```
/// use quire_url::normalize_link;
///
/// assert_eq!(normalize_link("../some/dir/", "about/"), "../../some/dir/");
/// assert_eq!(normalize_link("../some/dir/", ""), "../some/dir/");
/// ```
pub fn normalize_link_from<'a, P: OutputPage + ?Sized>(
    link: &'a str,
    page: &P,
    base: LinkBase,
) -> Cow<'a, str> {
    let Some(LinkParts { path, suffix }) = split_link(link) else {
        return Cow::Borrowed(link);
    };

    let target = match base {
        LinkBase::Document if !path.starts_with('/') => {
            let dir = page.document_dir().trim_matches('/');
            if dir.is_empty() {
                path
            } else {
                Cow::Owned(format!("{dir}/{path}"))
            }
        }
        _ => path,
    };

    let relative = relative_url(&target, page.url());
    // `..` segments that climb above the site root point outside of it and
    // are kept in front of the relativized path.
    let levels = if target.starts_with('/') {
        0
    } else {
        levels_above_root(&target)
    };
    let mut result = if levels == 0 {
        relative
    } else if relative == "." {
        format!("{}..", "../".repeat(levels - 1))
    } else if relative == "./" {
        "../".repeat(levels)
    } else {
        format!("{}{relative}", "../".repeat(levels))
    };
    result.push_str(suffix);
    Cow::Owned(result)
}

/// Path and suffix of a site-relative link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts<'a> {
    /// Path portion with `/` separators.
    pub path: Cow<'a, str>,
    /// `?query` and/or `#fragment`, empty if absent.
    pub suffix: &'a str,
}

/// Split a link into path and suffix, or `None` if it must be left unchanged.
///
/// Empty links, fragment-only links, external links and links without a
/// path (`?page=2`) return `None`. Backslashes in the path are replaced with
/// `/` after logging a warning.
pub fn split_link(link: &str) -> Option<LinkParts<'_>> {
    if link.is_empty() || link.starts_with('#') || is_external(link) {
        return None;
    }

    let (path, suffix) = split_suffix(link);
    if path.is_empty() {
        return None;
    }

    let path = if path.contains('\\') {
        tracing::warn!(
            link = %link,
            "Link path contains backslashes, use '/' as the path separator"
        );
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    };

    Some(LinkParts { path, suffix })
}

/// Check whether a link points outside the site.
///
/// A link is external when it starts with `//` (scheme-relative) or has a URI
/// scheme such as `https:`, `mailto:` or `data:`.
pub fn is_external(link: &str) -> bool {
    link.starts_with("//") || has_scheme(link)
}

/// RFC 3986 scheme: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn has_scheme(link: &str) -> bool {
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split a link into its path and the `?query`/`#fragment` suffix.
fn split_suffix(link: &str) -> (&str, &str) {
    match link.find(['?', '#']) {
        Some(pos) => link.split_at(pos),
        None => (link, ""),
    }
}
