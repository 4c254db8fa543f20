//! Transport provider that resolves first hops from config text alone.
//!
//! It understands the config shapes the pipeline emits:
//!
//! - `ss://` links (SIP002 and the legacy all-base64 form)
//! - legacy flat `server`/`server_port` configs
//! - `$type: shadowsocks` with a `host:port` or `$type: dial` endpoint
//! - `$type: tcpudp`, resolving stream and packet paths separately
//!
//! Nothing is dialed, so the reported first hops are the configured ones.

mod uri;

use tracing::debug;
use yaml_doc_core::{parse, NodeExt, Value};

use crate::canonical::CanonicalTransportText;
use crate::detect::URI_PREFIX;
use crate::error::PlatformError;
use crate::legacy::LegacyShadowsocksConfig;
use crate::transport::{TransportClient, TransportProvider};


/// AEAD ciphers accepted for Shadowsocks configs.
pub const SUPPORTED_CIPHERS: [&str; 4] = [
    "chacha20-ietf-poly1305",
    "aes-256-gcm",
    "aes-192-gcm",
    "aes-128-gcm",
];

/// Config-only [`TransportProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTransportProvider;

impl TransportProvider for StaticTransportProvider {
    fn new_client(
        &self,
        transport: &CanonicalTransportText,
    ) -> Result<TransportClient, PlatformError> {
        let text = transport.as_str();
        let client = if text.starts_with(URI_PREFIX) {
            uri::first_hop(text).map(TransportClient::single_hop)?
        } else {
            let node = parse(text).map_err(|err| {
                PlatformError::invalid_config(format!("failed to parse transport config: {err}"))
            })?;
            resolve(&node)?
        };
        debug!(
            stream = %client.stream_first_hop,
            packet = %client.packet_first_hop,
            "resolved static first hops"
        );
        Ok(client)
    }
}

fn resolve(node: &Value) -> Result<TransportClient, PlatformError> {
    match node {
        Value::String(link) => uri::first_hop(link).map(TransportClient::single_hop),
        Value::Mapping(_) => resolve_typed(node),
        other => Err(PlatformError::invalid_config(format!(
            "transport config must be a link or a mapping, found {}",
            other.kind()
        ))),
    }
}

fn resolve_typed(node: &Value) -> Result<TransportClient, PlatformError> {
    match node.text_field("$type") {
        Some("tcpudp") => {
            let stream = resolve(required(node, "tcp")?)?;
            let packet = resolve(required(node, "udp")?)?;
            Ok(TransportClient {
                stream_first_hop: stream.stream_first_hop,
                packet_first_hop: packet.packet_first_hop,
            })
        }
        Some("shadowsocks") => shadowsocks(node).map(TransportClient::single_hop),
        Some(other) => Err(
            PlatformError::invalid_config(format!("unsupported config type: {other}"))
                .with_detail("type", other),
        ),
        None if node.field("endpoint").is_some() => {
            shadowsocks(node).map(TransportClient::single_hop)
        }
        None if node.field("server").is_some() => legacy(node).map(TransportClient::single_hop),
        None => Err(PlatformError::invalid_config(
            "unsupported config type: mapping has no $type",
        )),
    }
}

fn shadowsocks(node: &Value) -> Result<String, PlatformError> {
    check_cipher(node.text_field("cipher").unwrap_or_default(), "cipher")?;
    if node.field("secret").map_or(true, NodeExt::is_blank) {
        return Err(
            PlatformError::invalid_config("shadowsocks config is missing secret")
                .with_detail("field", "secret"),
        );
    }
    endpoint(required(node, "endpoint")?)
}

fn endpoint(node: &Value) -> Result<String, PlatformError> {
    if let Some(address) = node.as_str() {
        return validate_address(address);
    }
    match node.text_field("$type") {
        None | Some("dial") => {}
        Some(other) => {
            return Err(
                PlatformError::invalid_config(format!("unsupported endpoint type: {other}"))
                    .with_detail("type", other),
            )
        }
    }
    let address = node.text_field("address").ok_or_else(|| {
        PlatformError::invalid_config("endpoint is missing address").with_detail("field", "address")
    })?;
    validate_address(address)
}

fn legacy(node: &Value) -> Result<String, PlatformError> {
    let config = LegacyShadowsocksConfig::from_node(node.clone())
        .map_err(|err| PlatformError::invalid_config(format!("invalid legacy config: {err}")))?;
    check_cipher(&config.method, "method")?;
    validate_address(&config.address())
}

fn required<'a>(node: &'a Value, key: &str) -> Result<&'a Value, PlatformError> {
    node.field(key).filter(|child| !child.is_blank()).ok_or_else(|| {
        PlatformError::invalid_config(format!("config is missing {key}")).with_detail("field", key)
    })
}

fn check_cipher(cipher: &str, field: &str) -> Result<(), PlatformError> {
    if SUPPORTED_CIPHERS.contains(&cipher) {
        return Ok(());
    }
    let message = if cipher.is_empty() {
        format!("config is missing {field}")
    } else {
        format!("unsupported cipher: {cipher}")
    };
    Err(PlatformError::invalid_config(message).with_detail("field", field))
}

/// Check a `host:port` address and return it unchanged.
///
/// IPv6 hosts must be bracketed; the port must be a non-zero `u16`.
pub(crate) fn validate_address(address: &str) -> Result<String, PlatformError> {
    let invalid = |reason: &str| {
        PlatformError::invalid_config(format!("invalid address {address:?}: {reason}"))
    };
    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| invalid("missing port"))?;

    if host.is_empty() || host == "[]" {
        return Err(invalid("missing host"));
    }
    let bracketed = host.starts_with('[') && host.ends_with(']');
    if host.contains(':') && !bracketed {
        return Err(invalid("IPv6 host must be bracketed"));
    }
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid("port must be between 1 and 65535")),
        Ok(_) => Ok(address.to_string()),
    }
}
