//! JSON convenience wrappers.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Serialize a value to a JSON string.
pub fn to_json_string<T: Serialize>(params: &T) -> Result<String> {
    serde_json::to_string(params).context("Failed to serialize value to JSON")
}

/// Parse a JSON string into a typed value.
pub fn from_json_str<T: DeserializeOwned>(data: &str) -> Result<T> {
    serde_json::from_str(data).context("Failed to parse JSON")
}

/// Whether the object contains the key with a non-null value.
pub fn has_item(params: &Map<String, Value>, key: &str) -> bool {
    matches!(params.get(key), Some(value) if !value.is_null())
}
