use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canonical::CanonicalTransportText;
use crate::error::PlatformError;
use crate::transport::TransportProvider;

/// Successful parse result handed to the app.
///
/// This is a public wire contract shared with the app's config loader; field
/// names and meaning must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TunnelConfigJson {
    /// Shared first hop, or empty when stream and packet paths differ.
    pub first_hop: String,
    pub transport: String,
}

/// Validate canonical text by building a client, then render the JSON result.
///
/// Provider errors are returned as-is.
pub fn build_response<P>(
    transport: CanonicalTransportText,
    provider: &P,
) -> Result<String, PlatformError>
where
    P: TransportProvider + ?Sized,
{
    let client = provider.new_client(&transport)?;
    let first_hop = client.shared_first_hop().unwrap_or_default().to_string();
    debug!(
        stream = %client.stream_first_hop,
        packet = %client.packet_first_hop,
        first_hop = %first_hop,
        "transport client built"
    );

    let response = TunnelConfigJson {
        first_hop,
        transport: transport.into_string(),
    };
    serde_json::to_string(&response).map_err(|err| {
        PlatformError::internal(format!("failed to serialize JSON response: {err}"))
    })
}
