//! Raw addresses as they arrive from configuration: a single string or a list.

use serde::{Deserialize, Serialize};

/// An untyped address. YAML documents may supply either shape, so this
/// deserializes untagged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AddressSource {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for AddressSource {
    fn from(value: &str) -> Self {
        AddressSource::One(value.to_string())
    }
}

impl From<String> for AddressSource {
    fn from(value: String) -> Self {
        AddressSource::One(value)
    }
}

impl From<Vec<String>> for AddressSource {
    fn from(values: Vec<String>) -> Self {
        AddressSource::Many(values)
    }
}

impl From<Vec<&str>> for AddressSource {
    fn from(values: Vec<&str>) -> Self {
        AddressSource::Many(values.into_iter().map(str::to_string).collect())
    }
}
