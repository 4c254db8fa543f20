//! End-to-end tunnel config parsing.
//!
//! Stages run strictly in order and the first failure ends the call:
//!
//! 1. **Normalize input** — trim, unescape `\/`
//! 2. **Detect** — `ss://` URI, provider error, nested `transport`, or legacy
//! 3. **Provider error** — short-circuit with `ProviderError`
//! 4. **Canonicalize** — URI verbatim, legacy remapped, or `transport` subtree
//! 5. **Validate** — build a client through the [`TransportProvider`]
//! 6. **Respond** — `{"firstHop", "transport"}` JSON

use tracing::debug;

use crate::canonical::{canonicalize, CanonicalTransportText};
use crate::detect::{detect_shape, ConfigShape, TransportSource};
use crate::error::PlatformError;
use crate::input::RawInput;
use crate::response::build_response;
use crate::transport::TransportProvider;

#[cfg(test)]
mod tests;

/// Either the serialized [`TunnelConfigJson`](crate::response::TunnelConfigJson)
/// or the error that stopped the pipeline.
pub type TunnelConfigResult = Result<String, PlatformError>;

/// Parse, normalize and validate a tunnel config.
pub fn parse_tunnel_config<P>(input: &str, provider: &P) -> TunnelConfigResult
where
    P: TransportProvider + ?Sized,
{
    let transport = normalize_tunnel_config(input)?;
    build_response(transport, provider)
}

/// Run the pipeline up to canonical text, without building a client.
pub fn normalize_tunnel_config(input: &str) -> Result<CanonicalTransportText, PlatformError> {
    let source = classify(input)?;
    canonicalize(source)
}

fn classify(input: &str) -> Result<TransportSource, PlatformError> {
    let raw = RawInput::new(input);
    match detect_shape(&raw)? {
        ConfigShape::ProviderError(payload) => {
            debug!("provider error short-circuits parsing");
            Err(payload.into_platform_error())
        }
        ConfigShape::Transport(source) => Ok(source),
    }
}
