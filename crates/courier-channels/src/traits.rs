//! Core channel traits.

use crate::outcome::DispatchOutcome;
use crate::policy::ChannelPolicy;
use async_trait::async_trait;
use courier_core::{Message, MessageFormat};
use serde::Serialize;

/// A provider-specific channel adapter.
///
/// Adapters inspect only the format and payload a [`Message`] reports. They
/// hold no per-call state, so one instance is shared by every dispatch.
#[async_trait]
pub trait ChannelAdapter: Send + Sync {
    /// Human-readable channel name (distinct from the registry key).
    fn channel_name(&self) -> &str;

    /// Content policy applied before sending.
    fn policy(&self) -> &ChannelPolicy;

    /// Check if the channel can carry a message format.
    fn supports(&self, _format: MessageFormat) -> bool {
        true
    }

    /// Validate and send a message to a recipient.
    ///
    /// Send failures are reported in the returned outcome, never as an error.
    async fn send(&self, message: &Message, recipient: &str) -> DispatchOutcome;
}

/// Provider-ready form of a message, as handed to a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    /// Provider message kind (e.g. `sendVideo`, `image`).
    pub kind: &'static str,

    /// Format reported by the source message.
    pub format: MessageFormat,

    /// Unmodified payload.
    pub content: String,

    /// Confirmation text reported back on success.
    pub note: String,
}

impl Envelope {
    /// Wrap a message for a provider.
    pub fn new(message: &Message, kind: &'static str, note: impl Into<String>) -> Self {
        Self {
            kind,
            format: message.format(),
            content: message.payload().to_string(),
            note: note.into(),
        }
    }
}
