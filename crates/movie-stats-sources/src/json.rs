// JSON helpers shared by file-backed sources and exporters

use serde::{de::DeserializeOwned, Serialize};

/// Deserialize a value from a JSON string.
pub fn from_json<T>(content: &str) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str(content)
}

/// Serialize a value as indented JSON.
pub fn to_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(value)
}
