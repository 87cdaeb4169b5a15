use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static NULL: ConfigValue = ConfigValue::Null;

/// Generic parsed representation of one resource's declared properties.
///
/// Hosts build this from whatever format they parsed upstream. Accessors are total:
/// a shape mismatch yields `Null` or an empty slice instead of an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Sequence(Vec<ConfigValue>),
    Mapping(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Entry under `key`, or `Null` when absent or when `self` is not a mapping.
    pub fn get(&self, key: &str) -> &ConfigValue {
        match self {
            ConfigValue::Mapping(m) => m.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Elements of a sequence; empty for every other shape.
    pub fn as_sequence(&self) -> &[ConfigValue] {
        match self {
            ConfigValue::Sequence(items) => items,
            _ => &[],
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => ConfigValue::Number(n),
            Value::String(s) => ConfigValue::String(s),
            Value::Array(items) => {
                ConfigValue::Sequence(items.into_iter().map(ConfigValue::from).collect())
            }
            Value::Object(map) => ConfigValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigValue {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        ConfigValue::Mapping(iter.into_iter().collect())
    }
}

impl FromIterator<ConfigValue> for ConfigValue {
    fn from_iter<I: IntoIterator<Item = ConfigValue>>(iter: I) -> Self {
        ConfigValue::Sequence(iter.into_iter().collect())
    }
}
