//! Transport that logs envelopes instead of sending them.

use super::Transport;
use crate::error::TransportError;
use crate::traits::Envelope;
use async_trait::async_trait;
use tracing::info;

/// Logs every envelope and reports success.
///
/// Stands in for a provider SDK in demos and dry runs.
#[derive(Debug, Clone, Default)]
pub struct LogTransport;

impl LogTransport {
    /// Create a new log transport.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for LogTransport {
    async fn transmit(
        &self,
        channel_name: &str,
        envelope: &Envelope,
        recipient: &str,
    ) -> Result<(), TransportError> {
        info!(
            channel = %channel_name,
            recipient = %recipient,
            kind = envelope.kind,
            format = %envelope.format,
            bytes = envelope.content.len(),
            "{}",
            envelope.note
        );
        Ok(())
    }
}
