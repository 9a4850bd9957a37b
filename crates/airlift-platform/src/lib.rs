//! Remote build platform client for airlift.
//!
//! [`DeployClient`] drives the two platform-facing stages of a deploy:
//! uploading an archive (source slot → PUT → build creation) and
//! polling the resulting build until it reaches a terminal status.
//! The wire protocol lives behind the [`BuildApi`] trait so tests can
//! substitute a scripted platform; [`HttpPlatform`] is the production
//! implementation.

pub mod api;
pub mod client;
pub mod http;

pub use api::{ApiError, Build, BuildApi, BuildOutcome, BuildStatus, LogLine, SourceSlot};
pub use client::{DeployClient, PollError, PollOptions, UploadError, DEFAULT_POLL_INTERVAL};
pub use http::HttpPlatform;
