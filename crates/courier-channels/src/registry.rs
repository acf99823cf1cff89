//! Channel registry mapping channel keys to adapters.

use crate::adapters::{FacebookAdapter, InstagramAdapter, TelegramAdapter, WhatsAppAdapter};
use crate::error::ChannelError;
use crate::policy::ChannelPolicy;
use crate::traits::ChannelAdapter;
use crate::transport::Transport;
use crate::Result;
use courier_core::config::{ChannelPolicyConfig, ChannelsConfig};
use courier_core::id;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable mapping from normalized channel keys to adapters.
///
/// Built once through [`ChannelRegistryBuilder`] (or one of the
/// constructors) and never modified afterwards.
#[derive(Clone, Default)]
pub struct ChannelRegistry {
    channels: HashMap<String, Arc<dyn ChannelAdapter>>,
}

impl ChannelRegistry {
    /// Create a registry with the four built-in channels and default policies.
    pub fn with_defaults(transport: Arc<dyn Transport>) -> Self {
        Self::from_config(&ChannelsConfig::default(), transport)
    }

    /// Create a registry with the enabled built-in channels from configuration.
    pub fn from_config(config: &ChannelsConfig, transport: Arc<dyn Transport>) -> Self {
        let mut channels: HashMap<String, Arc<dyn ChannelAdapter>> = HashMap::new();

        for (key, channel) in config.iter() {
            if !channel.enabled {
                debug!("Skipping disabled channel: {}", key);
                continue;
            }
            if let Some(adapter) = builtin(key, channel, transport.clone()) {
                channels.insert(key.to_string(), adapter);
            }
        }

        info!("Built channel registry with {} channel(s)", channels.len());
        Self { channels }
    }

    /// Get an adapter by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<Arc<dyn ChannelAdapter>> {
        self.channels.get(&id::channel_key(key)).cloned()
    }

    /// Check whether a key is registered (case-insensitive).
    pub fn contains(&self, key: &str) -> bool {
        self.channels.contains_key(&id::channel_key(key))
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.channels.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over `(key, adapter)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn ChannelAdapter>)> {
        let mut entries: Vec<_> = self
            .channels
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries.into_iter()
    }

    /// Number of registered channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether no channels are registered.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl std::fmt::Debug for ChannelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelRegistry")
            .field("channels", &self.keys())
            .finish()
    }
}

/// Construct a built-in adapter by key.
fn builtin(
    key: &str,
    config: &ChannelPolicyConfig,
    transport: Arc<dyn Transport>,
) -> Option<Arc<dyn ChannelAdapter>> {
    let adapter: Arc<dyn ChannelAdapter> = match key {
        WhatsAppAdapter::KEY => Arc::new(WhatsAppAdapter::new(transport).with_policy(
            ChannelPolicy::from_config(config, WhatsAppAdapter::TEXT_MAX_LENGTH),
        )),
        TelegramAdapter::KEY => Arc::new(TelegramAdapter::new(transport).with_policy(
            ChannelPolicy::from_config(config, TelegramAdapter::TEXT_MAX_LENGTH),
        )),
        FacebookAdapter::KEY => Arc::new(FacebookAdapter::new(transport).with_policy(
            ChannelPolicy::from_config(config, FacebookAdapter::TEXT_MAX_LENGTH),
        )),
        InstagramAdapter::KEY => Arc::new(InstagramAdapter::new(transport).with_policy(
            ChannelPolicy::from_config(config, InstagramAdapter::TEXT_MAX_LENGTH),
        )),
        _ => return None,
    };
    Some(adapter)
}

/// Builder for registries with custom adapters.
#[derive(Default)]
pub struct ChannelRegistryBuilder {
    channels: HashMap<String, Arc<dyn ChannelAdapter>>,
}

impl ChannelRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing registry's entries.
    pub fn from_registry(registry: ChannelRegistry) -> Self {
        Self {
            channels: registry.channels,
        }
    }

    /// Register an adapter under `key`.
    ///
    /// The key is case-folded; registering the same key twice is an error.
    pub fn register(mut self, key: &str, adapter: Arc<dyn ChannelAdapter>) -> Result<Self> {
        let key = id::channel_key(key);

        if !id::is_valid_key(&key) {
            return Err(ChannelError::InvalidKey(key));
        }
        if self.channels.contains_key(&key) {
            return Err(ChannelError::AlreadyExists(key));
        }

        debug!("Registered channel {} ({})", key, adapter.channel_name());
        self.channels.insert(key, adapter);
        Ok(self)
    }

    /// Build the registry.
    pub fn build(self) -> ChannelRegistry {
        ChannelRegistry {
            channels: self.channels,
        }
    }
}
