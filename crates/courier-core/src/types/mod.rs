//! Core type definitions.

mod message;

pub use message::*;
