//! ID generation and normalization utilities.

use uuid::Uuid;

/// Generate a new UUID v4.
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Normalize a channel key for registry insertion and lookup.
///
/// Keys are case-folded; nothing else about the input is altered, so
/// `"WhatsApp"`, `"whatsapp"` and `"WHATSAPP"` all resolve to `"whatsapp"`.
pub fn channel_key(name: &str) -> String {
    name.to_lowercase()
}

/// Check if a key is valid for registration (alphanumeric + underscores only).
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_')
}
