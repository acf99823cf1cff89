//! Configuration loading and persistence.

use super::{Config, TransportKind};
use crate::error::ConfigError;
use crate::paths;
use std::fs;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        Self::load(&path)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        debug!("Loaded configuration from {}", path.display());
        Self::parse(&content)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Save configuration to a file path.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json5()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write atomically
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Serialize to JSON5 string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 doesn't have a serializer; pretty JSON is valid JSON5
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // 1. Transport settings
        if self.transport.timeout_secs == 0 {
            errors.push("Transport timeout_secs must be greater than 0".to_string());
        }
        if self.transport.kind == TransportKind::Webhook {
            match &self.transport.webhook_url {
                None => errors.push(
                    "Transport kind is 'webhook' but webhook_url is not set".to_string(),
                ),
                Some(raw) => {
                    if let Err(e) = url::Url::parse(raw) {
                        errors.push(format!("Invalid webhook_url '{}': {}", raw, e));
                    }
                }
            }
        }

        // 2. Per-channel policy values
        for (key, channel) in self.channels.iter() {
            if channel.preview_length == 0 {
                errors.push(format!("Channel '{}': preview_length must be greater than 0", key));
            }
            if channel.large_video_threshold == 0 {
                errors.push(format!(
                    "Channel '{}': large_video_threshold must be greater than 0",
                    key
                ));
            }
            if channel.text_max_length == Some(0) {
                errors.push(format!(
                    "Channel '{}': text_max_length must be greater than 0",
                    key
                ));
            }
        }

        // 3. Something must be routable
        if self.channels.enabled_count() == 0 {
            errors.push("At least one channel must be enabled".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }

    /// Load configuration from an explicit path, or the default path when `None`.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }

    /// Load configuration, falling back to defaults if no file exists.
    ///
    /// Only a missing file yields defaults. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::load_from(path) {
            Err(ConfigError::NotFound(path)) => {
                debug!("No configuration at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }
}
