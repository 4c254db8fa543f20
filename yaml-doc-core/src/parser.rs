use serde::de::DeserializeOwned;
use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur while parsing text into a [`Value`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input could not be tokenized or decoded as a single YAML document.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse YAML text into a [`Value`] tree.
///
/// JSON is accepted as a subset of YAML. Aliases (`*name`) are expanded into
/// full copies of the anchored node. Blank input yields [`Value::Null`].
pub fn parse(text: &str) -> Result<Value, ParseError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Decode a parsed [`Value`] tree into a typed structure.
pub fn decode<T: DeserializeOwned>(node: Value) -> Result<T, ParseError> {
    Ok(serde_yaml::from_value(node)?)
}
