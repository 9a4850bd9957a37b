use airlift_core::Credential;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ApiError, Build, BuildApi, BuildOutcome, SourceSlot};

/// Build platform API over HTTP with bearer-token authentication.
pub struct HttpPlatform {
    base_url: String,
    http: reqwest::Client,
}

impl HttpPlatform {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }
}

impl BuildApi for HttpPlatform {
    async fn create_source(&self, auth: &Credential) -> Result<SourceSlot, ApiError> {
        let url = format!("{}/apps/{}/sources", self.base_url, auth.app_name);
        debug!(app = %auth.app_name, "requesting source slot");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&auth.api_token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let envelope: SourceResponse = response.json().await?;
        Ok(envelope.source_blob)
    }

    async fn upload_archive(&self, put_url: &str, archive: Vec<u8>) -> Result<(), ApiError> {
        debug!(bytes = archive.len(), "uploading archive to source slot");

        // The slot's signed URL points at a storage backend that
        // rejects chunked transfer encoding, so the buffer goes up as
        // one body with a known length. No auth header: the URL
        // itself carries the grant.
        let response = self.http.put(put_url).body(archive).send().await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(())
    }

    async fn create_build(&self, auth: &Credential, source_url: &str) -> Result<Build, ApiError> {
        let url = format!("{}/apps/{}/builds", self.base_url, auth.app_name);
        debug!(app = %auth.app_name, "creating build");

        let request = BuildRequest {
            source_blob: SourceBlobRef { url: source_url },
        };
        let response = self
            .http
            .post(&url)
            .bearer_auth(&auth.api_token)
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.json().await?)
    }

    async fn build_result(
        &self,
        auth: &Credential,
        build_id: &str,
    ) -> Result<BuildOutcome, ApiError> {
        let url = format!(
            "{}/apps/{}/builds/{}/result",
            self.base_url, auth.app_name, build_id
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&auth.api_token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.json().await?)
    }
}

/// Map a non-success response to an [`ApiError`], extracting the
/// service's own message when the body matches the documented error
/// shape.
async fn rejection(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return ApiError::UnexpectedResponse { status },
    };

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) => ApiError::Rejected {
            message: err.message,
        },
        Err(_) => ApiError::UnexpectedResponse { status },
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SourceResponse {
    source_blob: SourceSlot,
}

#[derive(Debug, Serialize)]
struct BuildRequest<'a> {
    source_blob: SourceBlobRef<'a>,
}

#[derive(Debug, Serialize)]
struct SourceBlobRef<'a> {
    url: &'a str,
}
