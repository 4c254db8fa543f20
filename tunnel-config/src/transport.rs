//! Contract for the component that builds a transport client from canonical
//! config text.

use crate::canonical::CanonicalTransportText;
use crate::error::PlatformError;

/// Endpoint information exposed by a constructed transport client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportClient {
    /// First hop of the stream (TCP) dialer, `host:port`, or empty if unknown.
    pub stream_first_hop: String,
    /// First hop of the packet (UDP) listener, `host:port`, or empty if unknown.
    pub packet_first_hop: String,
}

impl TransportClient {
    /// Client whose stream and packet paths share one first hop.
    pub fn single_hop(first_hop: impl Into<String>) -> Self {
        let first_hop = first_hop.into();
        Self {
            stream_first_hop: first_hop.clone(),
            packet_first_hop: first_hop,
        }
    }

    /// The shared first hop, if both paths report the same non-empty address.
    pub fn shared_first_hop(&self) -> Option<&str> {
        if !self.stream_first_hop.is_empty() && self.stream_first_hop == self.packet_first_hop {
            Some(&self.stream_first_hop)
        } else {
            None
        }
    }
}

/// Builds a transport client from canonical config text.
///
/// Errors are returned to the caller of the pipeline unchanged.
pub trait TransportProvider {
    fn new_client(&self, transport: &CanonicalTransportText)
        -> Result<TransportClient, PlatformError>;
}

impl<F> TransportProvider for F
where
    F: Fn(&CanonicalTransportText) -> Result<TransportClient, PlatformError>,
{
    fn new_client(
        &self,
        transport: &CanonicalTransportText,
    ) -> Result<TransportClient, PlatformError> {
        self(transport)
    }
}
