//! Configuration value tree.

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ConfigError;

/// String-keyed mapping that keeps document order.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A configuration value.
///
/// Closed counterpart of a YAML node after tags have been resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// `null`, `~` or an empty value.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer or floating point scalar.
    Number(serde_yaml::Number),
    /// String scalar.
    String(String),
    /// Sequence of values.
    Sequence(Vec<ConfigValue>),
    /// Nested mapping.
    Mapping(ConfigMap),
}

impl ConfigValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Deserialize the value into a caller-defined type.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the value does not match `T`.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let yaml = serde_yaml::to_value(self)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        serde_yaml::from_value(yaml).map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(value: ConfigMap) -> Self {
        Self::Mapping(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        Self::Sequence(value)
    }
}

/// Look up a dotted key path (`"theme.palette.primary"`) in a mapping.
///
/// Returns `None` if any segment is missing or a non-mapping value is hit
/// before the last segment.
#[must_use]
pub fn get_path<'a>(map: &'a ConfigMap, path: &str) -> Option<&'a ConfigValue> {
    let mut segments = path.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_mapping()?.get(segment)?;
    }
    Some(current)
}
