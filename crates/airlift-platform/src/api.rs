use std::fmt;

use airlift_core::Credential;
use serde::{Deserialize, Serialize};

/// Abstraction over the build platform API for testability.
///
/// Production code uses [`crate::HttpPlatform`], tests use
/// mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait BuildApi: Send + Sync {
    /// Request a one-time upload/retrieval URL pair for the app.
    async fn create_source(&self, auth: &Credential) -> Result<SourceSlot, ApiError>;

    /// Transfer the archive to the upload URL as one complete body.
    async fn upload_archive(&self, put_url: &str, archive: Vec<u8>) -> Result<(), ApiError>;

    /// Trigger a build of the source at `source_url`.
    async fn create_build(&self, auth: &Credential, source_url: &str) -> Result<Build, ApiError>;

    /// Fetch the current result of a build, including any output lines.
    async fn build_result(&self, auth: &Credential, build_id: &str)
        -> Result<BuildOutcome, ApiError>;
}

/// Upload/retrieval URL pair issued by the platform for one deploy
/// attempt. Single-use.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSlot {
    pub put_url: String,
    pub get_url: String,
}

/// A triggered build; `id` is the key for status polling.
#[derive(Debug, Clone, Deserialize)]
pub struct Build {
    pub id: String,
    pub status: BuildStatus,
}

/// Build status as reported by the platform.
///
/// Transitions only run `Pending` → `Succeeded` or `Failed`; anything
/// other than `Pending` is terminal. A wire value this client does not
/// recognize is preserved in `Other` instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildStatus {
    Pending,
    Succeeded,
    Failed,
    Other(String),
}

impl BuildStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl From<String> for BuildStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl From<BuildStatus> for String {
    fn from(status: BuildStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Other(status) => status,
        })
    }
}

/// Full build result payload: the build itself plus its output lines
/// in original order.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildOutcome {
    pub build: Build,
    #[serde(default)]
    pub lines: Vec<LogLine>,
}

/// One line of build output.
#[derive(Debug, Clone, Deserialize)]
pub struct LogLine {
    pub line: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The platform refused the call and said why; `message` is the
    /// service's own diagnostic, not transport noise.
    #[error("{message}")]
    Rejected { message: String },

    /// Non-success response whose body did not carry the structured
    /// error shape.
    #[error("unexpected response from the platform (HTTP {status})")]
    UnexpectedResponse { status: u16 },

    #[error("transport error")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        assert_eq!(BuildStatus::from("pending".to_owned()), BuildStatus::Pending);
        assert_eq!(
            BuildStatus::from("succeeded".to_owned()),
            BuildStatus::Succeeded
        );
        assert_eq!(BuildStatus::from("failed".to_owned()), BuildStatus::Failed);
    }

    #[test]
    fn status_preserves_unknown_values() {
        let status = BuildStatus::from("paused".to_owned());
        assert_eq!(status, BuildStatus::Other("paused".to_owned()));
        assert_eq!(status.to_string(), "paused");
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!BuildStatus::Pending.is_terminal());
        assert!(BuildStatus::Succeeded.is_terminal());
        assert!(BuildStatus::Failed.is_terminal());
        assert!(BuildStatus::Other("paused".to_owned()).is_terminal());
    }

    #[test]
    fn outcome_deserializes_without_lines() {
        let outcome: BuildOutcome =
            serde_json::from_str(r#"{"build":{"id":"b-1","status":"pending"}}"#).unwrap();
        assert_eq!(outcome.build.status, BuildStatus::Pending);
        assert!(outcome.lines.is_empty());
    }
}
