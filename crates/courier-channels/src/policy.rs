//! Per-channel content policy and preview helpers shared by all adapters.

use crate::outcome::PolicyWarning;
use courier_core::config::ChannelPolicyConfig;
use courier_core::{Message, MessageFormat};

/// Content policy applied by a channel adapter before sending.
///
/// Policies only annotate; they never drop or rewrite the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPolicy {
    /// Characters of content echoed in the outcome preview.
    pub preview_length: usize,

    /// Video payloads longer than this get a [`PolicyWarning::LargeVideo`].
    pub large_video_threshold: usize,

    /// Text payloads longer than this get a [`PolicyWarning::TextTooLong`].
    pub text_max_length: usize,
}

impl ChannelPolicy {
    /// Default preview length.
    pub const DEFAULT_PREVIEW_LENGTH: usize = 20;

    /// Default video size threshold.
    pub const DEFAULT_LARGE_VIDEO_THRESHOLD: usize = 1000;

    /// Create a policy with default preview and video settings.
    pub fn new(text_max_length: usize) -> Self {
        Self {
            preview_length: Self::DEFAULT_PREVIEW_LENGTH,
            large_video_threshold: Self::DEFAULT_LARGE_VIDEO_THRESHOLD,
            text_max_length,
        }
    }

    /// Build a policy from config, using `default_text_max` when the config leaves it unset.
    pub fn from_config(config: &ChannelPolicyConfig, default_text_max: usize) -> Self {
        Self {
            preview_length: config.preview_length,
            large_video_threshold: config.large_video_threshold,
            text_max_length: config.text_max_length.unwrap_or(default_text_max),
        }
    }

    /// Set the video size threshold.
    pub fn with_large_video_threshold(mut self, threshold: usize) -> Self {
        self.large_video_threshold = threshold;
        self
    }

    /// Set the preview length.
    pub fn with_preview_length(mut self, length: usize) -> Self {
        self.preview_length = length;
        self
    }

    /// Check a message against the policy.
    pub fn inspect(&self, message: &Message) -> Vec<PolicyWarning> {
        let len = message.len();
        let mut warnings = Vec::new();

        match message.format() {
            MessageFormat::Video if len > self.large_video_threshold => {
                warnings.push(PolicyWarning::LargeVideo {
                    len,
                    threshold: self.large_video_threshold,
                });
            }
            MessageFormat::Text if len > self.text_max_length => {
                warnings.push(PolicyWarning::TextTooLong {
                    len,
                    max: self.text_max_length,
                });
            }
            _ => {}
        }

        warnings
    }

    /// Preview of the message payload.
    pub fn preview(&self, message: &Message) -> String {
        preview(message.payload(), self.preview_length)
    }
}

/// Truncate `payload` to at most `max_chars` characters.
///
/// Cuts on character boundaries and appends `...` only when something was
/// cut, so payloads shorter than the limit (including empty ones) come back
/// unchanged.
pub fn preview(payload: &str, max_chars: usize) -> String {
    match payload.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &payload[..idx]),
        None => payload.to_string(),
    }
}
