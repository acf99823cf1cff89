//! Channel error types.

use std::time::Duration;
use thiserror::Error;

/// Errors raised by the routing layer.
///
/// Only channel resolution and construction fail this way; send failures
/// are reported inside a [`DispatchOutcome`](crate::DispatchOutcome).
#[derive(Debug, Error)]
pub enum ChannelError {
    /// No adapter is registered under the (normalized) channel key.
    #[error("Channel '{0}' is not supported")]
    UnsupportedChannel(String),

    /// A second adapter was registered under an existing key.
    #[error("Channel already exists: {0}")]
    AlreadyExists(String),

    /// Channel key is empty or contains characters other than `[A-Za-z0-9_]`.
    #[error("Invalid channel key: '{0}'")]
    InvalidKey(String),

    /// Channel or transport configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ChannelError {
    /// The offending key, for unsupported channel errors.
    pub fn unsupported_key(&self) -> Option<&str> {
        match self {
            Self::UnsupportedChannel(key) => Some(key),
            _ => None,
        }
    }
}

/// Errors reported by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request could not be completed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Provider answered with a non-success status.
    #[error("Provider rejected the message ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Provider could not be reached.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// Request timed out.
    #[error("Operation timed out")]
    Timeout,
}

impl TransportError {
    /// Check if this error is retriable.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Timeout | Self::Unavailable(_) => true,
            Self::Rejected { status, .. } => *status == 429 || *status >= 500,
            Self::Http(_) => false,
        }
    }

    /// Get retry delay if applicable.
    pub fn retry_delay(&self) -> Option<Duration> {
        match self {
            Self::Rejected { status: 429, .. } => Some(Duration::from_secs(5)),
            _ if self.is_retriable() => Some(Duration::from_secs(1)),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Unavailable(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}
