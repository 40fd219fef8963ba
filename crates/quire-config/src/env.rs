//! `!ENV` tag: values taken from environment variables.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;

use serde_yaml::Value;

use crate::tag::{TagHook, TagRegistry};
use crate::{ConfigError, ConfigValue};

/// Read access to environment variables.
pub trait Environment: Send + Sync {
    /// Value of the variable, or `None` if unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment, read at lookup time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher + Send + Sync> Environment for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Hook for `!ENV`.
///
/// - `!ENV NAME` resolves to the variable, or `null` if unset.
/// - `!ENV [NAME, ..., default]` tries each name in order; the last item is a
///   default used when none are set. A one-item sequence has no default.
///
/// The default is an ordinary YAML value and keeps its type. Variable values
/// are strings, except boolean words which become booleans.
pub struct EnvTag {
    env: Arc<dyn Environment>,
}

impl EnvTag {
    /// Tag name, without the leading `!`.
    pub const TAG: &'static str = "ENV";

    #[must_use]
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self { env }
    }
}

impl TagHook for EnvTag {
    fn tag(&self) -> &str {
        Self::TAG
    }

    fn construct(&self, value: Value, registry: &TagRegistry) -> Result<ConfigValue, ConfigError> {
        let (names, default) = match value {
            Value::Sequence(mut items) => {
                let default = if items.len() > 1 { items.pop() } else { None };
                (items, default)
            }
            Value::Null => (Vec::new(), None),
            Value::Mapping(_) | Value::Tagged(_) => {
                return Err(tag_error(
                    "expected a variable name or a sequence of names",
                ));
            }
            scalar => (vec![scalar], None),
        };

        for name in names {
            let name = variable_name(name)?;
            if let Some(value) = self.env.var(&name) {
                return Ok(coerce_env_value(value));
            }
        }

        match default {
            Some(default) => registry.construct(default),
            None => Ok(ConfigValue::Null),
        }
    }
}

/// Variable names are taken as strings whatever their YAML type.
fn variable_name(value: Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(tag_error("variable names must be scalars")),
    }
}

fn coerce_env_value(value: String) -> ConfigValue {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => ConfigValue::Bool(true),
        "false" | "no" | "off" => ConfigValue::Bool(false),
        _ => ConfigValue::String(value),
    }
}

fn tag_error(message: &str) -> ConfigError {
    ConfigError::Tag {
        tag: EnvTag::TAG.to_owned(),
        message: message.to_owned(),
    }
}
