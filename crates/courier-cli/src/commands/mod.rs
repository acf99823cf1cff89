//! CLI command implementations.

pub mod send;
pub mod demo;
pub mod channels;
pub mod config;
