//! Link rewriting in rendered HTML.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::link::{LinkBase, OutputPage, normalize_link_from};

/// `href` and `src` attributes with a double-quoted, single-quoted or unquoted value.
static LINK_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\s(?:href|src)\s*=\s*)(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#).unwrap()
});

/// Rewrite every `href` and `src` attribute of an HTML fragment relative to `page`.
///
/// Attribute values go through [`normalize_link_from`], so external links and
/// fragments are left alone. The rest of the markup is copied unchanged.
///
/// # Examples
///
/// ```
/// use quire_url::{LinkBase, rewrite_html_links};
///
/// let html = r#"<link href="css/theme.css"><a href="https://example.com">x</a>"#;
/// assert_eq!(
///     rewrite_html_links(html, "guide/", LinkBase::SiteRoot),
///     r#"<link href="../css/theme.css"><a href="https://example.com">x</a>"#,
/// );
/// ```
pub fn rewrite_html_links<'a, P: OutputPage + ?Sized>(
    html: &'a str,
    page: &P,
    base: LinkBase,
) -> Cow<'a, str> {
    rewrite_html_links_with(html, |link| normalize_link_from(link, page, base))
}

/// Rewrite every `href` and `src` attribute value of an HTML fragment with `rewrite`.
///
/// Double-quoted, single-quoted and unquoted values are all rewritten, and
/// the quoting style of each attribute is kept. Markup outside those
/// attribute values is copied unchanged.
pub fn rewrite_html_links_with<'a, F>(html: &'a str, mut rewrite: F) -> Cow<'a, str>
where
    F: for<'l> FnMut(&'l str) -> Cow<'l, str>,
{
    LINK_ATTR_RE.replace_all(html, |caps: &Captures<'_>| {
        let prefix = &caps[1];
        match (caps.get(2), caps.get(3), caps.get(4)) {
            (Some(value), _, _) => format!("{prefix}\"{}\"", rewrite(value.as_str())),
            (None, Some(value), _) => format!("{prefix}'{}'", rewrite(value.as_str())),
            (None, None, Some(value)) => format!("{prefix}{}", rewrite(value.as_str())),
            (None, None, None) => caps[0].to_owned(),
        }
    })
}
