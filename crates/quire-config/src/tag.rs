//! Parse-time hooks for custom YAML tags.
//!
//! YAML text is parsed into a [`serde_yaml::Value`] tree and then turned into
//! [`ConfigValue`]s. Tagged nodes (`!NAME value`) are handed to the
//! [`TagHook`] registered for that name while the surrounding mapping is
//! still being built, so the hook's result lands in the tree like any other
//! value.

use std::sync::Arc;

use serde_yaml::Value;
use serde_yaml::value::TaggedValue;

use crate::env::{EnvTag, ProcessEnv};
use crate::{ConfigError, ConfigMap, ConfigValue};

/// Handler for values carrying a specific YAML tag.
pub trait TagHook: Send + Sync {
    /// Tag name without the leading `!` (e.g. `"ENV"`).
    fn tag(&self) -> &str;

    /// Build the value for a tagged node.
    ///
    /// `value` is the node without its tag. Use `registry` to convert nested
    /// values that should be constructed normally.
    fn construct(&self, value: Value, registry: &TagRegistry) -> Result<ConfigValue, ConfigError>;
}

/// Set of tag hooks used while converting parsed YAML.
pub struct TagRegistry {
    hooks: Vec<Arc<dyn TagHook>>,
}

impl Default for TagRegistry {
    /// Registry with `!ENV` resolved against the process environment.
    fn default() -> Self {
        Self::empty().with_hook(EnvTag::new(Arc::new(ProcessEnv)))
    }
}

impl std::fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|hook| hook.tag()))
            .finish()
    }
}

impl TagRegistry {
    /// Registry without any hooks. Tagged values keep their inner value.
    #[must_use]
    pub fn empty() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook. A later hook for the same tag replaces the earlier one.
    #[must_use]
    pub fn with_hook(mut self, hook: impl TagHook + 'static) -> Self {
        self.hooks.retain(|existing| existing.tag() != hook.tag());
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Parse YAML text into a value, running tag hooks.
    ///
    /// Empty or whitespace-only text is `Null`. `name` identifies the
    /// document in error messages.
    pub fn parse(&self, text: &str, name: &str) -> Result<ConfigValue, ConfigError> {
        if text.trim().is_empty() {
            return Ok(ConfigValue::Null);
        }
        let value: Value = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            name: name.to_owned(),
            source,
        })?;
        self.construct(value)
    }

    /// Convert a parsed YAML value, running tag hooks.
    pub fn construct(&self, value: Value) -> Result<ConfigValue, ConfigError> {
        Ok(match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => ConfigValue::Number(n),
            Value::String(s) => ConfigValue::String(s),
            Value::Sequence(items) => ConfigValue::Sequence(
                items
                    .into_iter()
                    .map(|item| self.construct(item))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(mapping) => {
                let mut map = ConfigMap::with_capacity(mapping.len());
                for (key, value) in mapping {
                    map.insert(mapping_key(key)?, self.construct(value)?);
                }
                ConfigValue::Mapping(map)
            }
            Value::Tagged(tagged) => self.construct_tagged(*tagged)?,
        })
    }

    fn construct_tagged(&self, tagged: TaggedValue) -> Result<ConfigValue, ConfigError> {
        let TaggedValue { tag, value } = tagged;
        match self.hooks.iter().find(|hook| tag == hook.tag()) {
            Some(hook) => hook.construct(value, self),
            None => {
                tracing::warn!(tag = %tag, "Unknown YAML tag, using the untagged value");
                self.construct(value)
            }
        }
    }
}

/// Mapping keys must be scalars; non-string scalars use their YAML spelling.
fn mapping_key(key: Value) -> Result<String, ConfigError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_owned()),
        other => Err(ConfigError::Validation(format!(
            "mapping keys must be scalars, found {other:?}"
        ))),
    }
}
