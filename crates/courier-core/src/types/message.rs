//! Message types.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content kind of a [`Message`].
///
/// The set is closed: adapters match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Plain text.
    Text,

    /// Video (URL or path).
    Video,

    /// Photo / image.
    Photo,

    /// File attachment.
    File,
}

impl MessageFormat {
    /// All formats, in declaration order.
    pub const ALL: [MessageFormat; 4] = [
        MessageFormat::Text,
        MessageFormat::Video,
        MessageFormat::Photo,
        MessageFormat::File,
    ];

    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Video => "Video",
            Self::Photo => "Photo",
            Self::File => "File",
        }
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "video" => Ok(Self::Video),
            "photo" | "image" => Ok(Self::Photo),
            "file" | "document" => Ok(Self::File),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// A message to be dispatched through a channel.
///
/// The format is fixed by the constructor used, and neither field can be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    format: MessageFormat,
    payload: String,
}

impl Message {
    /// Create a text message.
    pub fn text(payload: impl Into<String>) -> Self {
        Self::with_format(MessageFormat::Text, payload)
    }

    /// Create a video message.
    pub fn video(payload: impl Into<String>) -> Self {
        Self::with_format(MessageFormat::Video, payload)
    }

    /// Create a photo message.
    pub fn photo(payload: impl Into<String>) -> Self {
        Self::with_format(MessageFormat::Photo, payload)
    }

    /// Create a file message.
    pub fn file(payload: impl Into<String>) -> Self {
        Self::with_format(MessageFormat::File, payload)
    }

    /// Create a message for a format chosen at runtime (e.g. parsed from CLI input).
    pub fn with_format(format: MessageFormat, payload: impl Into<String>) -> Self {
        Self {
            format,
            payload: payload.into(),
        }
    }

    /// The message format.
    pub fn format(&self) -> MessageFormat {
        self.format
    }

    /// The raw payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Payload length in characters.
    pub fn len(&self) -> usize {
        self.payload.chars().count()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
