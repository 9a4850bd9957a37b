//! The archive-then-upload convenience.

use std::path::Path;

use airlift_archive::{pack_dir_with_ignore_file, ArchiveError};
use airlift_core::Credential;
use airlift_platform::{Build, BuildApi, DeployClient, UploadError};

/// Package a directory and upload it for building, in one call.
///
/// Equivalent to [`pack_dir_with_ignore_file`] followed by
/// [`DeployClient::upload`]; callers holding an already-built buffer
/// should call `upload` directly. Poll the returned build's id with
/// [`DeployClient::await_completion`] to follow it to completion.
pub async fn deploy_dir<A: BuildApi>(
    client: &DeployClient<A>,
    auth: &Credential,
    dir: &Path,
    use_ignore_file: bool,
) -> Result<Build, DeployError> {
    let archive = pack_dir_with_ignore_file(dir, use_ignore_file)?;
    let build = client.upload(auth, archive).await?;
    Ok(build)
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}
