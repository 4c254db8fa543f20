use serde::Serialize;
use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur while writing YAML text.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize the tree.
    #[error("failed to write YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialize a [`Value`] tree into block-style YAML text.
///
/// Mapping keys keep their insertion order. Strings that would not survive
/// as plain scalars (leading or trailing spaces, reserved words, numerals)
/// are quoted.
pub fn write(node: &Value) -> Result<String, WriteError> {
    write_serialize(node)
}

/// Serialize any [`Serialize`] value into YAML text, fields in declaration order.
pub fn write_serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, WriteError> {
    Ok(serde_yaml::to_string(value)?)
}
