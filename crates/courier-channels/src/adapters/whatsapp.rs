//! WhatsApp Business adapter.

use super::deliver;
use crate::outcome::DispatchOutcome;
use crate::policy::ChannelPolicy;
use crate::traits::{ChannelAdapter, Envelope};
use crate::transport::Transport;
use async_trait::async_trait;
use courier_core::{Message, MessageFormat};
use std::fmt;
use std::sync::Arc;

/// WhatsApp channel adapter.
pub struct WhatsAppAdapter {
    transport: Arc<dyn Transport>,
    policy: ChannelPolicy,
}

impl WhatsAppAdapter {
    /// Registry key.
    pub const KEY: &'static str = "whatsapp";

    /// Display name.
    pub const DISPLAY_NAME: &'static str = "WhatsApp";

    /// Text body limit of the Cloud API.
    pub const TEXT_MAX_LENGTH: usize = 65536;

    /// Create a WhatsApp adapter with the default policy.
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

    // Cloud API message `type` values.
    fn message_type(format: MessageFormat) -> &'static str {
        match format {
            MessageFormat::Text => "text",
            MessageFormat::Video => "video",
            MessageFormat::Photo => "image",
            MessageFormat::File => "document",
        }
    }
}

impl fmt::Debug for WhatsAppAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhatsAppAdapter")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChannelAdapter for WhatsAppAdapter {
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
            Self::message_type(format),
            format!("{} message sent successfully", format),
        );
        deliver(self, self.transport.as_ref(), message, envelope, recipient).await
    }
}
