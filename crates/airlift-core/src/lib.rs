//! Core types and configuration for airlift.
//!
//! This crate defines the `airlift.toml` schema ([`AirliftConfig`]),
//! the deploy credential pair ([`Credential`]), and shared error types.

pub mod config;
pub mod credential;
pub mod error;

pub use config::{AirliftConfig, ApiConfig, AppConfig, PollConfig};
pub use credential::Credential;
pub use error::{Error, Result};
