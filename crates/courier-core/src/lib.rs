//! # courier-core
//!
//! Core types, configuration, and utilities for Courier.
//!
//! This crate provides shared functionality used across all Courier crates:
//!
//! - **Types**: The message hierarchy ([`Message`], [`MessageFormat`])
//! - **Configuration**: Loading, validation, and persistence of the config file
//! - **Utilities**: Path resolution and identifier helpers

pub mod config;
pub mod types;
pub mod error;
pub mod paths;
pub mod id;

// Re-exports for convenience
pub use config::Config;
pub use error::{ConfigError, Error};
pub use types::*;
