//! Dispatch outcomes.

use chrono::{DateTime, Utc};
use courier_core::{id, MessageFormat};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result of handing a message to a channel adapter.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    /// Unique dispatch ID.
    pub dispatch_id: String,

    /// Display name of the channel that handled the message.
    pub channel: String,

    /// Recipient as given by the caller.
    pub recipient: String,

    /// Format reported by the message.
    pub format: MessageFormat,

    /// Truncated content, for observability.
    pub preview: String,

    /// Whether the send went through.
    pub status: DispatchStatus,

    /// Non-fatal policy annotations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PolicyWarning>,

    /// When the adapter finished the attempt.
    pub dispatched_at: DateTime<Utc>,
}

/// Status of a dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    /// Transport accepted the message.
    Sent {
        /// Channel-specific confirmation text.
        note: String,
    },

    /// Message was not sent.
    Failed(DispatchFailure),
}

/// Why a dispatch attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum DispatchFailure {
    /// The injected transport reported an error.
    #[error("transport failure: {reason}")]
    Transport {
        /// Error reported by the transport.
        reason: String,
        /// Whether a retry might succeed.
        retriable: bool,
    },

    /// The adapter does not handle this format.
    #[error("{format} messages are not supported by {channel}")]
    UnsupportedFormat {
        /// Channel display name.
        channel: String,
        /// Rejected format.
        format: MessageFormat,
    },
}

/// Non-fatal policy annotation attached to a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyWarning {
    /// Video payload exceeds the channel's size threshold.
    LargeVideo {
        /// Payload length in characters.
        len: usize,
        /// Configured threshold.
        threshold: usize,
    },

    /// Text payload exceeds the channel's text limit.
    TextTooLong {
        /// Payload length in characters.
        len: usize,
        /// Channel text limit.
        max: usize,
    },
}

impl PolicyWarning {
    /// Short tag identifying the warning kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::LargeVideo { .. } => "large video",
            Self::TextTooLong { .. } => "text too long",
        }
    }
}

impl fmt::Display for PolicyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LargeVideo { len, threshold } => write!(
                f,
                "{}: {} > {} characters, delivery may take longer",
                self.tag(),
                len,
                threshold
            ),
            Self::TextTooLong { len, max } => write!(
                f,
                "{}: {} > {} characters, provider may split or reject it",
                self.tag(),
                len,
                max
            ),
        }
    }
}

impl DispatchOutcome {
    /// Create a successful outcome.
    pub fn sent(
        channel: impl Into<String>,
        recipient: impl Into<String>,
        format: MessageFormat,
        preview: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self::new(
            channel,
            recipient,
            format,
            preview,
            DispatchStatus::Sent { note: note.into() },
        )
    }

    /// Create a failed outcome.
    pub fn failed(
        channel: impl Into<String>,
        recipient: impl Into<String>,
        format: MessageFormat,
        preview: impl Into<String>,
        failure: DispatchFailure,
    ) -> Self {
        Self::new(channel, recipient, format, preview, DispatchStatus::Failed(failure))
    }

    fn new(
        channel: impl Into<String>,
        recipient: impl Into<String>,
        format: MessageFormat,
        preview: impl Into<String>,
        status: DispatchStatus,
    ) -> Self {
        Self {
            dispatch_id: id::uuid(),
            channel: channel.into(),
            recipient: recipient.into(),
            format,
            preview: preview.into(),
            status,
            warnings: Vec::new(),
            dispatched_at: Utc::now(),
        }
    }

    /// Attach policy warnings.
    pub fn with_warnings(mut self, warnings: Vec<PolicyWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Whether the message was handed off successfully.
    pub fn is_success(&self) -> bool {
        matches!(self.status, DispatchStatus::Sent { .. })
    }

    /// Failure reason, if the dispatch failed.
    pub fn failure(&self) -> Option<&DispatchFailure> {
        match &self.status {
            DispatchStatus::Failed(failure) => Some(failure),
            DispatchStatus::Sent { .. } => None,
        }
    }

    /// Confirmation note, if the dispatch succeeded.
    pub fn note(&self) -> Option<&str> {
        match &self.status {
            DispatchStatus::Sent { note } => Some(note),
            DispatchStatus::Failed(_) => None,
        }
    }

    /// First policy warning, if any.
    pub fn warning(&self) -> Option<&PolicyWarning> {
        self.warnings.first()
    }

    /// Check for a warning by tag (e.g. `"large video"`).
    pub fn has_warning(&self, tag: &str) -> bool {
        self.warnings.iter().any(|w| w.tag() == tag)
    }
}
