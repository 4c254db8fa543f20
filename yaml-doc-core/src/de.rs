//! Serde helpers for lenient document decoding.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::tree::NodeExt;

/// Deserialize an explicit null as the type's default value.
///
/// Use with `#[serde(default, deserialize_with = "null_as_default")]` so that
/// both a missing key and `key: ~` decode to the zero value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize any scalar into its text form.
///
/// Numbers and booleans become their decimal or `true`/`false` text, null
/// becomes the empty string. Sequences and mappings are rejected.
pub fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a scalar, found {}",
            other.kind()
        ))),
    }
}
