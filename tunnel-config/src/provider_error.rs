use serde::Deserialize;
use yaml_doc_core::de::scalar_as_string;
use yaml_doc_core::{decode, ParseError, Value};

use crate::error::{ErrorCode, PlatformError};

/// Message used when a provider error carries no message of its own.
pub const MISSING_MESSAGE: &str = "provider reported an error without a message";

/// Top-level `error` payload a config provider returns instead of a config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderErrorPayload {
    #[serde(deserialize_with = "scalar_as_string")]
    pub message: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub details: String,
}

impl ProviderErrorPayload {
    pub fn from_node(node: &Value) -> Result<Self, ParseError> {
        decode(node.clone())
    }

    /// Convert into a `ProviderError`, passing message and details through as-is.
    ///
    /// The `details` map is only present when the provider sent non-empty details.
    pub fn into_platform_error(self) -> PlatformError {
        let message = if self.message.is_empty() {
            MISSING_MESSAGE.to_string()
        } else {
            self.message
        };
        let err = PlatformError::new(ErrorCode::ProviderError, message);
        if self.details.is_empty() {
            err
        } else {
            err.with_detail("details", self.details)
        }
    }
}
