//! Deep merge of configuration mappings.

use crate::{ConfigMap, ConfigValue};

/// Merge `child` over `parent`, returning a new mapping.
///
/// # Merge Rules
///
/// - Key only in `parent`: kept as is
/// - Key only in `child`: added after the parent's keys
/// - Mapping in both: merged recursively
/// - Anything else: the child's value replaces the parent's, sequences included
///
/// Neither input is modified, so one parent can be merged under many children.
#[must_use]
pub fn deep_merge(parent: &ConfigMap, child: &ConfigMap) -> ConfigMap {
    let mut merged = parent.clone();
    for (key, child_value) in child {
        let value = match (merged.get(key), child_value) {
            (Some(ConfigValue::Mapping(parent_map)), ConfigValue::Mapping(child_map)) => {
                ConfigValue::Mapping(deep_merge(parent_map, child_map))
            }
            _ => child_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}
