//! Telegram Bot API adapter.

use super::deliver;
use crate::outcome::DispatchOutcome;
use crate::policy::ChannelPolicy;
use crate::traits::{ChannelAdapter, Envelope};
use crate::transport::Transport;
use async_trait::async_trait;
use courier_core::{Message, MessageFormat};
use std::fmt;
use std::sync::Arc;

/// Telegram channel adapter.
///
/// Maps each format onto the Bot API method that carries it
/// (`sendMessage`, `sendVideo`, `sendPhoto`, `sendDocument`).
pub struct TelegramAdapter {
    transport: Arc<dyn Transport>,
    policy: ChannelPolicy,
}

impl TelegramAdapter {
    /// Registry key.
    pub const KEY: &'static str = "telegram";

    /// Display name.
    pub const DISPLAY_NAME: &'static str = "Telegram";

    /// Bot API text message limit.
    pub const TEXT_MAX_LENGTH: usize = 4096;

    /// Create a Telegram adapter with the default policy.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            policy: ChannelPolicy::new(Self::TEXT_MAX_LENGTH),
        }
    }

    /// Replace the content policy.
    pub fn with_policy(mut self, policy: ChannelPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn method(format: MessageFormat) -> &'static str {
        match format {
            MessageFormat::Text => "sendMessage",
            MessageFormat::Video => "sendVideo",
            MessageFormat::Photo => "sendPhoto",
            MessageFormat::File => "sendDocument",
        }
    }
}

impl fmt::Debug for TelegramAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramAdapter")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChannelAdapter for TelegramAdapter {
    fn channel_name(&self) -> &str {
        Self::DISPLAY_NAME
    }

    fn policy(&self) -> &ChannelPolicy {
        &self.policy
    }

    async fn send(&self, message: &Message, recipient: &str) -> DispatchOutcome {
        let format = message.format();
        let envelope = Envelope::new(
            message,
            Self::method(format),
            format!("{} message dispatched", format),
        );
        deliver(self, self.transport.as_ref(), message, envelope, recipient).await
    }
}
