use serde::{Deserialize, Serialize};
use yaml_doc_core::de::{null_as_default, scalar_as_string};
use yaml_doc_core::{decode, write_serialize, ParseError, Value, WriteError};

/// Flat five-field Shadowsocks config that predates the nested `transport` schema.
///
/// Field order is the canonical output order. Every field is always written,
/// with missing ones as their zero value. Scalars in text fields are kept as
/// their text, so `password: 123456` decodes to `"123456"`. The port is not
/// range-checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyShadowsocksConfig {
    #[serde(deserialize_with = "scalar_as_string")]
    pub server: String,
    #[serde(deserialize_with = "null_as_default")]
    pub server_port: u64,
    #[serde(deserialize_with = "scalar_as_string")]
    pub method: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub password: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub prefix: String,
}

impl LegacyShadowsocksConfig {
    /// Decode from a document root. Unrelated keys are ignored.
    pub fn from_node(node: Value) -> Result<Self, ParseError> {
        decode(node)
    }

    /// Re-serialize under the canonical key order.
    pub fn to_canonical_text(&self) -> Result<String, WriteError> {
        write_serialize(self)
    }

    /// `server:server_port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server, self.server_port)
    }
}
