//! Package a directory and deploy it to a remote build service.
//!
//! This is the unified facade crate that re-exports all Airlift
//! sub-crates. Use feature flags to control which components are
//! included.
//!
//! # Feature flags
//!
//! | Feature | Default | Crate | Description |
//! |---------|---------|-------|-------------|
//! | `core` | yes | [`airlift-core`](https://crates.io/crates/airlift-core) | Configuration and credential types |
//! | `archive` | yes | [`airlift-archive`](https://crates.io/crates/airlift-archive) | Directory packaging with gitignore filtering |
//! | `platform` | yes | [`airlift-platform`](https://crates.io/crates/airlift-platform) | Build platform upload and polling client |
//!
//! # Quick start
//!
//! ```toml
//! [dependencies]
//! airlift = "0.1"
//! ```
//!
//! ```rust,no_run
//! use std::path::Path;
//! use airlift::Credential;
//! use airlift::platform::DeployClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = Credential::new("api-token", "my-app");
//! let client = DeployClient::new("https://api.airlift.dev");
//!
//! let build = airlift::pipeline::deploy_dir(&client, &auth, Path::new("."), true).await?;
//! let outcome = client.await_completion(&auth, &build.id).await?;
//! println!("build {} {}", outcome.build.id, outcome.build.status);
//! # Ok(())
//! # }
//! ```

// Core types flattened into root namespace for convenience.
#[cfg(feature = "core")]
pub use airlift_core::*;

/// Directory packaging and ignore filtering.
///
/// See [`airlift-archive`](https://crates.io/crates/airlift-archive) for details.
#[cfg(feature = "archive")]
pub mod archive {
    pub use airlift_archive::*;
}

/// Build platform upload and polling client.
///
/// See [`airlift-platform`](https://crates.io/crates/airlift-platform) for details.
#[cfg(feature = "platform")]
pub mod platform {
    pub use airlift_platform::*;
}

#[cfg(all(feature = "core", feature = "archive", feature = "platform"))]
pub mod pipeline;
