use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use tracing::debug;
use yaml_doc_core::{write, WriteError};

use crate::detect::TransportSource;
use crate::error::PlatformError;

/// Normalized transport config text, used both as output and as provider input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalTransportText(String);

impl CanonicalTransportText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for CanonicalTransportText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl Display for CanonicalTransportText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a classified transport source as canonical text.
///
/// URIs pass through untouched. Legacy configs are rewritten under the
/// fixed five-key order. Nested configs emit only the `transport` subtree,
/// with aliases expanded.
pub fn canonicalize(source: TransportSource) -> Result<CanonicalTransportText, PlatformError> {
    let text = match source {
        TransportSource::Uri(uri) => uri,
        TransportSource::Legacy(config) => config.to_canonical_text().map_err(normalize_failure)?,
        TransportSource::Nested(node) => write(&node).map_err(normalize_failure)?,
    };
    debug!(bytes = text.len(), "transport config canonicalized");
    Ok(CanonicalTransportText(text))
}

fn normalize_failure(err: WriteError) -> PlatformError {
    PlatformError::invalid_config(format!("failed to normalize config: {err}"))
}
