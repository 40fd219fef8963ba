//! Sources of configuration documents.
//!
//! The loader asks a [`DocumentSource`] for the root document and for every
//! parent named by `INHERIT`. Parents are looked up relative to the document
//! that names them.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A document read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Stable identity of the document, used to resolve its own parents
    /// and to detect inheritance cycles.
    pub id: String,
    /// Raw YAML text.
    pub text: String,
}

/// Error returned by a [`DocumentSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No document with that name.
    #[error("{0} not found")]
    NotFound(String),
    /// The name could not be expanded.
    #[error("cannot expand {name}: {message}")]
    Expand {
        /// Name as written.
        name: String,
        /// Expansion failure.
        message: String,
    },
    /// Reading the document failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Provider of raw configuration documents.
pub trait DocumentSource: Send + Sync {
    /// Read the document called `name`.
    ///
    /// `referrer` is the [`Document::id`] of the document naming it, or
    /// `None` for the root document.
    fn read(&self, name: &str, referrer: Option<&str>) -> Result<Document, SourceError>;
}

/// Filesystem document source.
///
/// Names are file paths. `~` and `${VAR}` / `${VAR:-default}` are expanded
/// first; relative paths are resolved against the referring document's
/// directory, or the base directory for the root document.
#[derive(Debug, Clone)]
pub struct FsSource {
    base_dir: PathBuf,
}

impl FsSource {
    /// Create a source resolving root documents against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Base directory for root documents.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, name: &str, referrer: Option<&str>) -> Result<PathBuf, SourceError> {
        let expanded = expand_name(name)?;
        let path = Path::new(&expanded);
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let dir = referrer
            .and_then(|id| Path::new(id).parent())
            .unwrap_or(&self.base_dir);
        Ok(dir.join(path))
    }
}

impl DocumentSource for FsSource {
    fn read(&self, name: &str, referrer: Option<&str>) -> Result<Document, SourceError> {
        let path = self.resolve(name, referrer)?;
        let not_found = |e: std::io::Error| {
            if e.kind() == ErrorKind::NotFound {
                SourceError::NotFound(path.display().to_string())
            } else {
                SourceError::Io(e)
            }
        };
        let canonical = fs::canonicalize(&path).map_err(not_found)?;
        let text = fs::read_to_string(&canonical).map_err(not_found)?;
        Ok(Document {
            id: canonical.to_string_lossy().into_owned(),
            text,
        })
    }
}

/// Expand `~` and environment variables in a document name.
fn expand_name(name: &str) -> Result<String, SourceError> {
    // Fast path: no expansion needed
    if !name.contains('$') && !name.starts_with('~') {
        return Ok(name.to_owned());
    }

    shellexpand::full(name)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| SourceError::Expand {
            name: name.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

/// In-memory document source keyed by name.
///
/// Names are looked up verbatim; the referrer is ignored.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    /// Add or replace a document.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(name.into(), text.into());
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, name: &str, _referrer: Option<&str>) -> Result<Document, SourceError> {
        self.documents
            .get(name)
            .map(|text| Document {
                id: name.to_owned(),
                text: text.clone(),
            })
            .ok_or_else(|| SourceError::NotFound(name.to_owned()))
    }
}
