//! Channel adapters and dispatch routing for Courier.
//!
//! This crate binds the message hierarchy from `courier-core` to the
//! per-provider channel adapters. The [`Router`] is the single entry point:
//! it resolves a channel key through the [`ChannelRegistry`] and hands the
//! message to the matching [`ChannelAdapter`], which applies its
//! [`ChannelPolicy`] and passes an [`Envelope`] to the injected
//! [`Transport`].

pub mod error;
pub mod traits;
pub mod outcome;
pub mod policy;
pub mod transport;
pub mod adapters;
pub mod registry;
pub mod routing;

pub use error::{ChannelError, TransportError};
pub use traits::{ChannelAdapter, Envelope};
pub use outcome::{DispatchFailure, DispatchOutcome, DispatchStatus, PolicyWarning};
pub use policy::{preview, ChannelPolicy};
pub use transport::{LogTransport, Transport, WebhookTransport};
pub use adapters::{FacebookAdapter, InstagramAdapter, TelegramAdapter, WhatsAppAdapter};
pub use registry::{ChannelRegistry, ChannelRegistryBuilder};
pub use routing::Router;

/// Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;
