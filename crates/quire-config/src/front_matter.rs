//! YAML front matter of Markdown documents.

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::TagRegistry;
use crate::{ConfigMap, ConfigValue};

/// A `---` line, the YAML block, then a closing `---` or `...` line.
static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A-{3}[ \t]*\r?\n((?s:.*?)\r?\n)(?:-{3}|\.{3})[ \t]*(?:\r?\n|\z)").unwrap()
});

/// MultiMarkdown `Key: value` line.
static MM_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ ]{0,3}([A-Za-z0-9_-]+):\s*(.*)$").unwrap());

/// MultiMarkdown continuation line, indented by four spaces or a tab.
static MM_MORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[ ]{4}|\t)\s*(.*)$").unwrap());

/// A document split into its front matter and body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Parsed front matter, empty when the document has none.
    pub meta: ConfigMap,
    /// Document text after the front matter.
    pub body: String,
}

impl FrontMatter {
    fn plain(text: &str) -> Self {
        Self {
            meta: ConfigMap::new(),
            body: text.to_owned(),
        }
    }

    /// Whether the document had usable front matter.
    #[must_use]
    pub fn has_meta(&self) -> bool {
        !self.meta.is_empty()
    }
}

/// Split YAML front matter off a document.
///
/// `!ENV` tags resolve against the process environment. Front matter never
/// inherits, so `INHERIT` is an ordinary key here.
///
/// If the block is not valid YAML or not a mapping, the whole text is
/// returned as the body with empty metadata.
///
/// Without a `---` block, leading MultiMarkdown metadata is read instead:
/// `Key: value` lines up to the first blank line. Keys are lowercased,
/// values are strings, indented lines continue the previous value and a
/// repeated key appends to it. A document starting with a blank line has no
/// metadata. Leading blank lines are trimmed from the body.
///
/// # Examples
///
/// ```
/// use quire_config::{ConfigValue, split_front_matter};
///
/// let page = split_front_matter("---\ntitle: Install\n---\n\n# Install\n");
/// assert_eq!(page.meta["title"], ConfigValue::from("Install"));
/// assert_eq!(page.body, "# Install\n");
///
/// let plain = split_front_matter("# No front matter\n");
/// assert!(plain.meta.is_empty());
/// assert_eq!(plain.body, "# No front matter\n");
/// ```
pub fn split_front_matter(text: &str) -> FrontMatter {
    split_with_registry(text, &TagRegistry::default())
}

pub(crate) fn split_with_registry(text: &str, registry: &TagRegistry) -> FrontMatter {
    let Some(caps) = FRONT_MATTER_RE.captures(text) else {
        return split_multimarkdown(text);
    };

    match registry.parse(&caps[1], "front matter") {
        Ok(ConfigValue::Mapping(meta)) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            FrontMatter {
                meta,
                body: text[end..].trim_start_matches(['\r', '\n']).to_owned(),
            }
        }
        Ok(_) => FrontMatter::plain(text),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid front matter, keeping it as document text");
            FrontMatter::plain(text)
        }
    }
}

fn split_multimarkdown(text: &str) -> FrontMatter {
    let mut meta = ConfigMap::new();
    let mut key: Option<String> = None;
    let mut end = 0;

    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\r', '\n']);
        if content.trim().is_empty() {
            end += line.len();
            break;
        }
        if let Some(caps) = MM_KEY_RE.captures(content) {
            let name = caps[1].to_lowercase();
            append_value(&mut meta, &name, caps[2].trim());
            key = Some(name);
        } else if let (Some(name), Some(caps)) = (&key, MM_MORE_RE.captures(content)) {
            append_value(&mut meta, name, caps[1].trim());
        } else {
            break;
        }
        end += line.len();
    }

    FrontMatter {
        meta,
        body: text[end..].trim_start_matches(['\r', '\n']).to_owned(),
    }
}

fn append_value(meta: &mut ConfigMap, key: &str, value: &str) {
    match meta.get_mut(key) {
        Some(ConfigValue::String(existing)) => {
            existing.push(' ');
            existing.push_str(value);
        }
        _ => {
            meta.insert(key.to_owned(), ConfigValue::from(value));
        }
    }
}
