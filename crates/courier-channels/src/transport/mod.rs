//! Outbound transports.
//!
//! A [`Transport`] is the seam between the adapters and the network. Retry
//! and backoff policies wrap a transport; the adapters only report
//! [`TransportError::is_retriable`] in the dispatch outcome.

mod log;
mod webhook;

pub use self::log::LogTransport;
pub use self::webhook::WebhookTransport;

use crate::error::{ChannelError, TransportError};
use crate::traits::Envelope;
use crate::Result;
use async_trait::async_trait;
use courier_core::config::{TransportConfig, TransportKind};
use std::sync::Arc;
use std::time::Duration;

/// Hands an envelope to a provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transmit an envelope to `recipient` on the named channel.
    async fn transmit(
        &self,
        channel_name: &str,
        envelope: &Envelope,
        recipient: &str,
    ) -> std::result::Result<(), TransportError>;
}

/// Build the transport described by the configuration.
pub fn from_config(config: &TransportConfig) -> Result<Arc<dyn Transport>> {
    match config.kind {
        TransportKind::Log => Ok(Arc::new(LogTransport::new())),
        TransportKind::Webhook => {
            let url = config.webhook_url.as_deref().ok_or_else(|| {
                ChannelError::Config("webhook transport requires webhook_url".to_string())
            })?;
            let transport =
                WebhookTransport::new(url, Duration::from_secs(config.timeout_secs))?;
            Ok(Arc::new(transport))
        }
    }
}
