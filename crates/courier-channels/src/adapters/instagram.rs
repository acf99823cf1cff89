//! Instagram Direct adapter.

use super::deliver;
use crate::outcome::DispatchOutcome;
use crate::policy::ChannelPolicy;
use crate::traits::{ChannelAdapter, Envelope};
use crate::transport::Transport;
use async_trait::async_trait;
use courier_core::{Message, MessageFormat};
use std::fmt;
use std::sync::Arc;

/// Instagram Direct channel adapter.
pub struct InstagramAdapter {
    transport: Arc<dyn Transport>,
    policy: ChannelPolicy,
}

impl InstagramAdapter {
    /// Registry key.
    pub const KEY: &'static str = "instagram";

    /// Display name.
    pub const DISPLAY_NAME: &'static str = "Instagram Direct";

    /// Direct message text limit.
    pub const TEXT_MAX_LENGTH: usize = 1000;

    /// Create an Instagram adapter with the default policy.
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

    fn attachment_type(format: MessageFormat) -> &'static str {
        match format {
            MessageFormat::Text => "text",
            MessageFormat::Video => "video",
            MessageFormat::Photo => "image",
            MessageFormat::File => "file",
        }
    }
}

impl fmt::Debug for InstagramAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstagramAdapter")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChannelAdapter for InstagramAdapter {
    fn channel_name(&self) -> &str {
        Self::DISPLAY_NAME
    }

    fn policy(&self) -> &ChannelPolicy {
        &self.policy
    }

    async fn send(&self, message: &Message, recipient: &str) -> DispatchOutcome {
        let envelope = Envelope::new(
            message,
            Self::attachment_type(message.format()),
            "Sent via Direct Message",
        );
        deliver(self, self.transport.as_ref(), message, envelope, recipient).await
    }
}
