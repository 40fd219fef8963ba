//! Hierarchical configuration loader.

use std::sync::Arc;

use crate::env::{EnvTag, Environment};
use crate::front_matter::{FrontMatter, split_with_registry};
use crate::merge::deep_merge;
use crate::source::{DocumentSource, SourceError};
use crate::tag::{TagHook, TagRegistry};
use crate::{ConfigError, ConfigMap, ConfigValue};

/// Reserved top-level key naming the parent document.
pub const INHERIT_KEY: &str = "INHERIT";

/// Name used in errors for documents loaded from a string.
const INLINE_DOCUMENT: &str = "<string>";

/// Loads configuration documents and resolves their inheritance chain.
///
/// The loader holds no mutable state and can be shared between threads.
#[derive(Debug)]
pub struct ConfigLoader<S> {
    source: S,
    registry: TagRegistry,
}

impl<S: DocumentSource> ConfigLoader<S> {
    /// Create a loader with `!ENV` resolved against the process environment.
    pub fn new(source: S) -> Self {
        Self {
            source,
            registry: TagRegistry::default(),
        }
    }

    /// Resolve `!ENV` against `env` instead of the process environment.
    #[must_use]
    pub fn with_environment(self, env: Arc<dyn Environment>) -> Self {
        self.with_hook(EnvTag::new(env))
    }

    /// Register an additional tag hook.
    #[must_use]
    pub fn with_hook(mut self, hook: impl TagHook + 'static) -> Self {
        self.registry = self.registry.with_hook(hook);
        self
    }

    /// The document source parents are read from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the document `name` and everything it inherits from.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the document doesn't exist,
    /// `ConfigError::ParentNotFound` if a parent named by `INHERIT` doesn't
    /// exist, `ConfigError::Cycle` for circular inheritance, and parse or
    /// shape errors from any document in the chain.
    pub fn load(&self, name: &str) -> Result<ConfigMap, ConfigError> {
        let document = self.source.read(name, None).map_err(|e| match e {
            SourceError::NotFound(_) => ConfigError::NotFound(name.to_owned()),
            other => source_error(other, name),
        })?;
        self.load_chain(&document.id, &document.text, Some(&document.id), &mut Vec::new())
    }

    /// Load a document from text.
    ///
    /// Parents are resolved as for a root document, e.g. against the base
    /// directory of an [`FsSource`](crate::FsSource).
    pub fn load_str(&self, text: &str) -> Result<ConfigMap, ConfigError> {
        self.load_chain(INLINE_DOCUMENT, text, None, &mut Vec::new())
    }

    /// Split YAML front matter off a document using this loader's tag hooks.
    ///
    /// See [`split_front_matter`](crate::split_front_matter).
    pub fn front_matter(&self, text: &str) -> FrontMatter {
        split_with_registry(text, &self.registry)
    }

    fn load_chain(
        &self,
        id: &str,
        text: &str,
        referrer: Option<&str>,
        chain: &mut Vec<String>,
    ) -> Result<ConfigMap, ConfigError> {
        if chain.iter().any(|seen| seen == id) {
            chain.push(id.to_owned());
            return Err(ConfigError::Cycle(chain.clone()));
        }

        let mut config = self.parse_mapping(text, id)?;
        let Some(parent_name) = config.shift_remove(INHERIT_KEY) else {
            return Ok(config);
        };
        let ConfigValue::String(parent_name) = parent_name else {
            return Err(ConfigError::Validation(format!(
                "{INHERIT_KEY} in {id} must be a string"
            )));
        };

        let parent = self
            .source
            .read(&parent_name, referrer)
            .map_err(|e| match e {
                SourceError::NotFound(_) => ConfigError::ParentNotFound {
                    name: parent_name.clone(),
                    referrer: id.to_owned(),
                },
                other => source_error(other, &format!("{INHERIT_KEY} in {id}")),
            })?;
        tracing::debug!(document = %id, parent = %parent.id, "Loading inherited configuration");

        chain.push(id.to_owned());
        let parent_config = self.load_chain(&parent.id, &parent.text, Some(&parent.id), chain)?;
        chain.pop();

        Ok(deep_merge(&parent_config, &config))
    }

    fn parse_mapping(&self, text: &str, id: &str) -> Result<ConfigMap, ConfigError> {
        match self.registry.parse(text, id)? {
            ConfigValue::Mapping(map) => Ok(map),
            ConfigValue::Null => Ok(ConfigMap::new()),
            _ => Err(ConfigError::NotAMapping { name: id.to_owned() }),
        }
    }
}

fn source_error(error: SourceError, field: &str) -> ConfigError {
    match error {
        SourceError::Io(e) => ConfigError::Io(e),
        SourceError::Expand { message, .. } => ConfigError::EnvVar {
            field: field.to_owned(),
            message,
        },
        SourceError::NotFound(name) => ConfigError::NotFound(name),
    }
}
