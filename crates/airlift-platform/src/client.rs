use std::time::Duration;

use airlift_core::Credential;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::api::{ApiError, Build, BuildApi, BuildOutcome, BuildStatus};
use crate::http::HttpPlatform;

/// Interval between build status checks unless overridden.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Deploy operations client, parameterized over the platform API for
/// testability.
pub struct DeployClient<A: BuildApi = HttpPlatform> {
    api: A,
}

impl DeployClient<HttpPlatform> {
    /// Client against the platform API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: HttpPlatform::new(base_url),
        }
    }
}

impl<A: BuildApi> DeployClient<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Upload an archive and trigger a build of it.
    ///
    /// Three platform calls in sequence: request a source slot, PUT
    /// the whole buffer to its upload URL, create a build referencing
    /// its retrieval URL. Every successful call consumes one slot on
    /// the platform; a failure at any step fails the whole operation
    /// and no retry is attempted.
    pub async fn upload(&self, auth: &Credential, archive: Vec<u8>) -> Result<Build, UploadError> {
        if let Some(field) = auth.missing_field() {
            return Err(UploadError::MissingCredential { field });
        }

        let slot = self.api.create_source(auth).await?;
        debug!(app = %auth.app_name, bytes = archive.len(), "source slot issued");

        self.api.upload_archive(&slot.put_url, archive).await?;

        let build = self.api.create_build(auth, &slot.get_url).await?;
        info!(app = %auth.app_name, build_id = %build.id, "build created");

        Ok(build)
    }

    /// Poll a build until it reaches a terminal status, checking
    /// immediately and then every [`DEFAULT_POLL_INTERVAL`], with no
    /// attempt bound.
    pub async fn await_completion(
        &self,
        auth: &Credential,
        build_id: &str,
    ) -> Result<BuildOutcome, PollError> {
        self.await_completion_with(auth, build_id, &PollOptions::default(), CancellationToken::new())
            .await
    }

    /// Poll a build with explicit pacing, bound, and cancellation.
    ///
    /// The first status check runs immediately; later checks follow a
    /// fixed wall-clock schedule and never overlap. A status query
    /// error ends the poll at once.
    pub async fn await_completion_with(
        &self,
        auth: &Credential,
        build_id: &str,
        options: &PollOptions,
        cancel: CancellationToken,
    ) -> Result<BuildOutcome, PollError> {
        if let Some(field) = auth.missing_field() {
            return Err(PollError::MissingCredential { field });
        }

        let mut ticks = tokio::time::interval(options.interval);
        let mut attempts: u32 = 0;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(PollError::Cancelled),
                _ = ticks.tick() => {}
            }

            attempts += 1;
            let outcome = self.api.build_result(auth, build_id).await?;
            debug!(build_id, status = %outcome.build.status, attempts, "checked build status");

            match outcome.build.status {
                BuildStatus::Pending => {}
                BuildStatus::Succeeded => return Ok(outcome),
                BuildStatus::Failed => {
                    let mut log = String::new();
                    for entry in &outcome.lines {
                        log.push_str(&entry.line);
                        log.push('\n');
                    }
                    return Err(PollError::BuildFailed { log });
                }
                BuildStatus::Other(status) => {
                    return Err(PollError::UnexpectedStatus { status });
                }
            }

            if let Some(max) = options.max_attempts {
                if attempts >= max {
                    return Err(PollError::AttemptsExhausted { attempts });
                }
            }
        }
    }
}

/// Pacing and bound for [`DeployClient::await_completion_with`].
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Wall-clock delay between status checks. Must be non-zero.
    pub interval: Duration,
    /// Give up after this many checks; `None` polls until the build
    /// reaches a terminal status.
    pub max_attempts: Option<u32>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("missing credential: {field}")]
    MissingCredential { field: &'static str },

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("missing credential: {field}")]
    MissingCredential { field: &'static str },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("build failed: {log}")]
    BuildFailed { log: String },

    #[error("build ended with unexpected status '{status}'")]
    UnexpectedStatus { status: String },

    #[error("polling cancelled")]
    Cancelled,

    #[error("build still pending after {attempts} status checks")]
    AttemptsExhausted { attempts: u32 },
}
