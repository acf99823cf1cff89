//! Shared test transports for the integration tests.

use async_trait::async_trait;
use courier_channels::{Envelope, Transport, TransportError};
use std::sync::Mutex;

/// One recorded `transmit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub channel: String,
    pub recipient: String,
    pub envelope: Envelope,
}

/// Transport that records every call and succeeds.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Transmission>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    pub fn sent(&self) -> Vec<Transmission> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn transmit(
        &self,
        channel_name: &str,
        envelope: &Envelope,
        recipient: &str,
    ) -> Result<(), TransportError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(Transmission {
                channel: channel_name.to_string(),
                recipient: recipient.to_string(),
                envelope: envelope.clone(),
            });
        }
        Ok(())
    }
}

/// Transport that always fails with the given error.
#[derive(Debug)]
pub struct FailingTransport(pub TransportError);

#[async_trait]
impl Transport for FailingTransport {
    async fn transmit(
        &self,
        _channel_name: &str,
        _envelope: &Envelope,
        _recipient: &str,
    ) -> Result<(), TransportError> {
        Err(self.0.clone())
    }
}
