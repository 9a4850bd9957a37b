use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("{path} does not exist or is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("failed to parse ignore patterns at {path}")]
    IgnoreParse {
        path: PathBuf,
        source: ignore::Error,
    },

    #[error("failed to archive {path}")]
    Pack {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to finish archive stream")]
    Stream { source: std::io::Error },

    #[error("failed to extract archive to {path}")]
    Unpack {
        path: PathBuf,
        source: std::io::Error,
    },
}
