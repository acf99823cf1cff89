//! Message routing to channel adapters.

use crate::error::ChannelError;
use crate::outcome::DispatchOutcome;
use crate::registry::ChannelRegistry;
use crate::traits::ChannelAdapter;
use crate::transport::{self, Transport};
use crate::Result;
use courier_core::{id, Config, Message};
use std::sync::Arc;
use tracing::debug;

/// Routes messages to channel adapters.
///
/// The router is the only place channel keys are resolved: an unknown key
/// fails before any adapter runs, and a known key forwards the message
/// untouched and returns the adapter's outcome as-is.
#[derive(Debug, Clone)]
pub struct Router {
    registry: ChannelRegistry,
}

impl Router {
    /// Create a router over a registry.
    pub fn new(registry: ChannelRegistry) -> Self {
        Self { registry }
    }

    /// Create a router with the four built-in channels on `transport`.
    pub fn with_default_channels(transport: Arc<dyn Transport>) -> Self {
        Self::new(ChannelRegistry::with_defaults(transport))
    }

    /// Create a router from configuration, using `transport` for every channel.
    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self::new(ChannelRegistry::from_config(&config.channels, transport))
    }

    /// Create a router from configuration, including its transport.
    ///
    /// The configuration is validated first; an invalid one is a
    /// [`ChannelError::Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ChannelError::Config(e.to_string()))?;
        let transport = transport::from_config(&config.transport)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Resolve a channel name to its adapter.
    pub fn resolve(&self, channel: &str) -> Result<Arc<dyn ChannelAdapter>> {
        let key = id::channel_key(channel);
        self.registry
            .get(&key)
            .ok_or(ChannelError::UnsupportedChannel(key))
    }

    /// Dispatch a message to a recipient on the named channel.
    ///
    /// Returns [`ChannelError::UnsupportedChannel`] when no adapter is
    /// registered for the channel. Send failures are not errors: inspect
    /// [`DispatchOutcome::is_success`].
    pub async fn dispatch(
        &self,
        channel: &str,
        message: &Message,
        recipient: &str,
    ) -> Result<DispatchOutcome> {
        let adapter = self.resolve(channel)?;
        debug!(
            "Routing {} message to {} ({})",
            message.format(),
            adapter.channel_name(),
            recipient
        );
        Ok(adapter.send(message, recipient).await)
    }

    /// Registered channel keys, sorted.
    pub fn channels(&self) -> Vec<&str> {
        self.registry.keys()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }
}
