//! Source pages and their links.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use quire_config::{
    ConfigLoader, ConfigMap, ConfigValue, DocumentSource, FrontMatter, split_front_matter,
};
use quire_url::{
    LinkBase, LinkParts, OutputPage, normalize_link_from, normalize_path, relative_url,
    rewrite_html_links_with, split_link,
};
use regex::Regex;

use crate::url::{UrlStyle, is_markdown, url_for_source};

/// First ATX level-one heading.
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());

/// Error reading a page from disk.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Source file not found.
    #[error("Source file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading source file.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

/// A Markdown source document and the URL it is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    src_path: String,
    src_dir: String,
    url: String,
    style: UrlStyle,
    meta: ConfigMap,
    markdown: String,
}

impl Page {
    /// Create a page from Markdown source text.
    ///
    /// `src_path` is the site path of the source file, e.g. `guide/install.md`.
    /// Front matter is split off with `!ENV` resolved against the process
    /// environment.
    pub fn from_markdown(src_path: &str, text: &str, style: UrlStyle) -> Self {
        Self::from_parts(src_path, split_front_matter(text), style)
    }

    /// Create a page, splitting front matter with the tag hooks of `loader`.
    pub fn with_loader<S: DocumentSource>(
        src_path: &str,
        text: &str,
        style: UrlStyle,
        loader: &ConfigLoader<S>,
    ) -> Self {
        Self::from_parts(src_path, loader.front_matter(text), style)
    }

    /// Read the page `src_path` from the documentation directory `docs_dir`.
    ///
    /// # Errors
    ///
    /// Returns `PageError::NotFound` if the file doesn't exist and
    /// `PageError::Io` if it can't be read.
    pub fn read(docs_dir: &Path, src_path: &str, style: UrlStyle) -> Result<Self, PageError> {
        let path = docs_dir.join(normalize_path(src_path));
        let text = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PageError::NotFound(path.clone()),
            _ => PageError::Io(e),
        })?;
        Ok(Self::from_markdown(src_path, &text, style))
    }

    fn from_parts(src_path: &str, front_matter: FrontMatter, style: UrlStyle) -> Self {
        let src_path = normalize_path(src_path);
        let src_dir = src_path
            .rsplit_once('/')
            .map_or("", |(dir, _)| dir)
            .to_owned();
        let url = url_for_source(&src_path, style);
        tracing::debug!(src = %src_path, url = %url, "Created page");
        Self {
            src_path,
            src_dir,
            url,
            style,
            meta: front_matter.meta,
            markdown: front_matter.body,
        }
    }

    /// Site path of the source file.
    pub fn src_path(&self) -> &str {
        &self.src_path
    }

    /// Site directory of the source file, empty at the root.
    pub fn src_dir(&self) -> &str {
        &self.src_dir
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn style(&self) -> UrlStyle {
        self.style
    }

    /// Front matter of the page.
    pub fn meta(&self) -> &ConfigMap {
        &self.meta
    }

    /// Markdown text after the front matter.
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Page title: the front matter `title`, else the first `# ` heading.
    pub fn title(&self) -> Option<&str> {
        if let Some(title) = self.meta.get("title").and_then(ConfigValue::as_str) {
            return Some(title);
        }
        H1_RE
            .captures(&self.markdown)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Rewrite a link written in this page's source so it works from its URL.
    ///
    /// Links to Markdown sources point at the target page's URL, keeping any
    /// `?query` or `#fragment`. Other links are taken relative to the source
    /// directory, or to the site root when they start with `/`. External and
    /// fragment-only links are unchanged.
    pub fn resolve_link<'a>(&self, link: &'a str) -> Cow<'a, str> {
        if !links_to_markdown(link) {
            return normalize_link_from(link, self, LinkBase::Document);
        }
        let Some(LinkParts { path, suffix }) = split_link(link) else {
            return Cow::Borrowed(link);
        };

        let src = if path.starts_with('/') || self.src_dir.is_empty() {
            path.into_owned()
        } else {
            format!("{}/{path}", self.src_dir)
        };
        let target = url_for_source(&src, self.style);
        // The empty root URL is a directory.
        let target = if target.is_empty() { "/" } else { &target };

        let mut resolved = relative_url(target, &self.url);
        resolved.push_str(suffix);
        Cow::Owned(resolved)
    }

    /// Rewrite every `href` and `src` of rendered HTML with [`resolve_link`](Self::resolve_link).
    pub fn rewrite_links<'a>(&self, html: &'a str) -> Cow<'a, str> {
        rewrite_html_links_with(html, |link| self.resolve_link(link))
    }
}

impl OutputPage for Page {
    fn url(&self) -> &str {
        &self.url
    }

    fn document_dir(&self) -> &str {
        &self.src_dir
    }
}

/// Check whether the path part of a link names a Markdown source.
fn links_to_markdown(link: &str) -> bool {
    let path = link.split(['?', '#']).next().unwrap_or(link);
    is_markdown(path)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use quire_config::MemorySource;

    use super::*;
    use pretty_assertions::assert_eq;

    fn page(src_path: &str, style: UrlStyle) -> Page {
        Page::from_markdown(src_path, "# Page\n", style)
    }

    #[test]
    fn test_from_markdown_splits_front_matter() {
        let page = Page::from_markdown(
            "guide/install.md",
            "---\ntitle: Installing\nweight: 2\n---\n# Install\n\nText\n",
            UrlStyle::Directory,
        );

        assert_eq!(page.src_path(), "guide/install.md");
        assert_eq!(page.src_dir(), "guide");
        assert_eq!(page.url(), "guide/install/");
        assert_eq!(page.meta()["weight"], ConfigValue::from(2_i64));
        assert_eq!(page.markdown(), "# Install\n\nText\n");
    }

    #[test]
    fn test_title_prefers_front_matter() {
        let page = Page::from_markdown(
            "a.md",
            "---\ntitle: From meta\n---\n# From heading\n",
            UrlStyle::Directory,
        );
        assert_eq!(page.title(), Some("From meta"));
    }

    #[test]
    fn test_title_falls_back_to_heading() {
        let page = Page::from_markdown("a.md", "Intro\n\n#  Heading  \n## Sub\n", UrlStyle::File);
        assert_eq!(page.title(), Some("Heading"));
    }

    #[test]
    fn test_title_heading_does_not_span_lines() {
        let page = Page::from_markdown("a.md", "#\n\nText\n", UrlStyle::File);
        assert_eq!(page.title(), None);

        let page = Page::from_markdown("b.md", "#\n# Real title\n", UrlStyle::File);
        assert_eq!(page.title(), Some("Real title"));
    }

    #[test]
    fn test_title_missing() {
        let page = Page::from_markdown("a.md", "## Only a subheading\n", UrlStyle::File);
        assert_eq!(page.title(), None);
    }

    #[test]
    fn test_with_loader_uses_loader_environment() {
        let env: HashMap<String, String> =
            HashMap::from([("RELEASE".to_owned(), "2.1".to_owned())]);
        let loader = ConfigLoader::new(MemorySource::new()).with_environment(Arc::new(env));

        let page = Page::with_loader(
            "notes.md",
            "---\nrelease: !ENV RELEASE\n---\nBody\n",
            UrlStyle::Directory,
            &loader,
        );

        assert_eq!(page.meta()["release"], ConfigValue::from("2.1"));
    }

    #[test]
    fn test_resolve_markdown_link_directory_style() {
        let page = page("guide/install.md", UrlStyle::Directory);
        assert_eq!(page.resolve_link("usage.md"), "../usage/");
        assert_eq!(page.resolve_link("usage.md#cli"), "../usage/#cli");
        assert_eq!(page.resolve_link("../about.md"), "../../about/");
        assert_eq!(page.resolve_link("api/index.md"), "../api/");
        assert_eq!(page.resolve_link("../index.md"), "../../");
        assert_eq!(page.resolve_link("/faq.md?x=1"), "../../faq/?x=1");
    }

    #[test]
    fn test_resolve_markdown_link_file_style() {
        let page = page("guide/install.md", UrlStyle::File);
        assert_eq!(page.resolve_link("usage.md"), "usage.html");
        assert_eq!(page.resolve_link("../index.md#top"), "../index.html#top");
        assert_eq!(page.resolve_link("api/README.md"), "api/index.html");
    }

    #[test]
    fn test_resolve_link_from_index_page() {
        let page = page("guide/index.md", UrlStyle::Directory);
        assert_eq!(page.url(), "guide/");
        assert_eq!(page.resolve_link("install.md"), "install/");
        assert_eq!(page.resolve_link("img/a.png"), "img/a.png");
    }

    #[test]
    fn test_resolve_link_from_root_index() {
        let page = page("index.md", UrlStyle::Directory);
        assert_eq!(page.url(), "");
        assert_eq!(page.resolve_link("guide/install.md"), "guide/install/");
        assert_eq!(page.resolve_link("index.md"), "./");
        assert_eq!(page.resolve_link("css/extra.css"), "css/extra.css");
    }

    #[test]
    fn test_resolve_asset_link_uses_source_directory() {
        let page = page("guide/install.md", UrlStyle::Directory);
        assert_eq!(page.resolve_link("img/shot.png"), "../img/shot.png");
        assert_eq!(page.resolve_link("/img/logo.png"), "../../img/logo.png");
        assert_eq!(page.resolve_link("../files/a.zip"), "../../files/a.zip");
    }

    #[test]
    fn test_resolve_link_leaves_external_and_fragments() {
        let page = page("guide/install.md", UrlStyle::Directory);
        for link in ["", "#top", "https://example.com/readme.md", "mailto:a@b.c", "?q=1"] {
            assert_eq!(page.resolve_link(link), link);
        }
    }

    #[test]
    fn test_rewrite_links() {
        let page = page("guide/install.md", UrlStyle::Directory);
        let html = r#"<a href="usage.md#cli">Usage</a> <img src='img/shot.png'> <a href="https://x.org">x</a>"#;
        assert_eq!(
            page.rewrite_links(html),
            r#"<a href="../usage/#cli">Usage</a> <img src='../img/shot.png'> <a href="https://x.org">x</a>"#
        );
    }

    #[test]
    fn test_read_page_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("guide")).unwrap();
        std::fs::write(
            dir.path().join("guide/setup.md"),
            "---\ntitle: Setup\n---\nBody\n",
        )
        .unwrap();

        let page = Page::read(dir.path(), "guide/setup.md", UrlStyle::File).unwrap();

        assert_eq!(page.url(), "guide/setup.html");
        assert_eq!(page.title(), Some("Setup"));
    }

    #[test]
    fn test_read_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let err = Page::read(dir.path(), "missing.md", UrlStyle::Directory).unwrap_err();
        assert!(matches!(err, PageError::NotFound(_)));
    }
}
