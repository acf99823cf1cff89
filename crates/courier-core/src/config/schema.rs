//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Main Courier configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Outbound transport settings.
    #[serde(default)]
    pub transport: TransportConfig,

    /// Per-channel settings.
    #[serde(default)]
    pub channels: ChannelsConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default)]
    pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The level as a `tracing` filter directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Which transport hands envelopes to providers.
    #[serde(default)]
    pub kind: TransportKind,

    /// Target URL for the webhook transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kind: TransportKind::default(),
            webhook_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Transport kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Log each envelope instead of sending it.
    #[default]
    Log,

    /// POST each envelope as JSON to `webhook_url`.
    Webhook,
}

/// Channels configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelsConfig {
    /// WhatsApp settings.
    #[serde(default)]
    pub whatsapp: ChannelPolicyConfig,

    /// Telegram settings.
    #[serde(default)]
    pub telegram: ChannelPolicyConfig,

    /// Facebook Messenger settings.
    #[serde(default)]
    pub facebook: ChannelPolicyConfig,

    /// Instagram Direct settings.
    #[serde(default)]
    pub instagram: ChannelPolicyConfig,
}

impl ChannelsConfig {
    /// Iterate over `(channel key, settings)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ChannelPolicyConfig)> {
        [
            ("whatsapp", &self.whatsapp),
            ("telegram", &self.telegram),
            ("facebook", &self.facebook),
            ("instagram", &self.instagram),
        ]
        .into_iter()
    }

    /// Number of enabled channels.
    pub fn enabled_count(&self) -> usize {
        self.iter().filter(|(_, c)| c.enabled).count()
    }
}

/// Per-channel policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPolicyConfig {
    /// Whether the channel is registered with the router.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Characters of content echoed back in dispatch outcomes.
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,

    /// Video payloads longer than this (in characters) get a size warning.
    #[serde(default = "default_large_video_threshold")]
    pub large_video_threshold: usize,

    /// Text length limit; the channel's own default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_max_length: Option<usize>,
}

impl Default for ChannelPolicyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            preview_length: default_preview_length(),
            large_video_threshold: default_large_video_threshold(),
            text_max_length: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_preview_length() -> usize {
    20
}

fn default_large_video_threshold() -> usize {
    1000
}
