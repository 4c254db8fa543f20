use std::fmt::Display;

use tracing::debug;
use yaml_doc_core::{parse, Mapping, NodeExt, Value};

use crate::error::PlatformError;
use crate::input::RawInput;
use crate::legacy::LegacyShadowsocksConfig;
use crate::provider_error::ProviderErrorPayload;

/// Scheme prefix of an opaque Shadowsocks URI config.
pub const URI_PREFIX: &str = "ss://";

/// Input shape, resolved once before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigShape {
    /// The provider returned a top-level `error` instead of a config.
    ProviderError(ProviderErrorPayload),
    /// A transport config in one of the accepted formats.
    Transport(TransportSource),
}

/// Transport config in one of its accepted source formats.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportSource {
    /// `ss://` link, kept verbatim.
    Uri(String),
    /// Flat legacy Shadowsocks fields at the document root.
    Legacy(LegacyShadowsocksConfig),
    /// The `transport` subtree of a modern config.
    Nested(Value),
}

impl ConfigShape {
    pub fn name(&self) -> &'static str {
        match self {
            ConfigShape::ProviderError(_) => "provider-error",
            ConfigShape::Transport(source) => source.name(),
        }
    }
}

impl TransportSource {
    pub fn name(&self) -> &'static str {
        match self {
            TransportSource::Uri(_) => "uri",
            TransportSource::Legacy(_) => "legacy",
            TransportSource::Nested(_) => "nested",
        }
    }
}

/// Classify normalized input.
///
/// Precedence: `ss://` prefix, then a non-empty top-level `error`, then a
/// non-empty top-level `transport`, else legacy flat fields. A document with
/// none of the known keys is accepted as an all-zero legacy config.
pub fn detect_shape(input: &RawInput) -> Result<ConfigShape, PlatformError> {
    let text = input.as_str();
    if text.starts_with(URI_PREFIX) {
        debug!("config classified as uri");
        return Ok(ConfigShape::Transport(TransportSource::Uri(text.to_string())));
    }

    let root = match parse(text).map_err(parse_failure)? {
        Value::Null => Value::Mapping(Mapping::new()),
        root @ Value::Mapping(_) => root,
        other => {
            return Err(parse_failure(format!(
                "document root must be a mapping, found {}",
                other.kind()
            )))
        }
    };

    if let Some(error) = root.field("error").filter(|node| !node.is_blank()) {
        let payload = ProviderErrorPayload::from_node(error).map_err(parse_failure)?;
        debug!("config classified as provider-error");
        return Ok(ConfigShape::ProviderError(payload));
    }

    if let Some(transport) = root.field("transport").filter(|node| !node.is_blank()) {
        debug!("config classified as nested");
        return Ok(ConfigShape::Transport(TransportSource::Nested(
            transport.clone(),
        )));
    }

    let legacy = LegacyShadowsocksConfig::from_node(root).map_err(parse_failure)?;
    debug!(server = %legacy.server, "config classified as legacy");
    Ok(ConfigShape::Transport(TransportSource::Legacy(legacy)))
}

fn parse_failure(err: impl Display) -> PlatformError {
    PlatformError::invalid_config(format!("failed to parse: {err}"))
}
