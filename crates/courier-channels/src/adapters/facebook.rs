//! Facebook Messenger adapter.

use super::deliver;
use crate::outcome::DispatchOutcome;
use crate::policy::ChannelPolicy;
use crate::traits::{ChannelAdapter, Envelope};
use crate::transport::Transport;
use async_trait::async_trait;
use courier_core::{Message, MessageFormat};
use std::fmt;
use std::sync::Arc;

/// Facebook Messenger channel adapter.
pub struct FacebookAdapter {
    transport: Arc<dyn Transport>,
    policy: ChannelPolicy,
}

impl FacebookAdapter {
    /// Registry key.
    pub const KEY: &'static str = "facebook";

    /// Display name.
    pub const DISPLAY_NAME: &'static str = "Facebook Messenger";

    /// Send API text limit.
    pub const TEXT_MAX_LENGTH: usize = 2000;

    /// Create a Messenger adapter with the default policy.
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

impl fmt::Debug for FacebookAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacebookAdapter")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChannelAdapter for FacebookAdapter {
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
            "Published to Messenger",
        );
        deliver(self, self.transport.as_ref(), message, envelope, recipient).await
    }
}
