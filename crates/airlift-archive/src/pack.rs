use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::error::ArchiveError;
use crate::filter::{IgnoreRules, PathFilter};

/// Package a directory tree into an in-memory tar.gz buffer.
///
/// Paths inside the archive are relative to `dir`. Entries the filter
/// denies are skipped; a denied directory is pruned without descending
/// into it.
pub fn pack_dir(dir: &Path, filter: Option<&dyn PathFilter>) -> Result<Vec<u8>, ArchiveError> {
    let meta = std::fs::metadata(dir).map_err(|_| ArchiveError::NotADirectory {
        path: dir.to_path_buf(),
    })?;
    if !meta.is_dir() {
        return Err(ArchiveError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.follow_symlinks(false);

    append_tree(&mut builder, dir, dir, filter)?;

    let encoder = builder
        .into_inner()
        .map_err(|e| ArchiveError::Stream { source: e })?;
    let data = encoder
        .finish()
        .map_err(|e| ArchiveError::Stream { source: e })?;

    debug!(bytes = data.len(), path = %dir.display(), "packed directory");

    Ok(data)
}

/// Package a directory, applying the ignore file at its root.
///
/// With `use_ignore_file` set, a `.gitignore` at the root of `dir`
/// decides exclusions; when no such file exists the flag is a no-op
/// and everything is packaged.
pub fn pack_dir_with_ignore_file(dir: &Path, use_ignore_file: bool) -> Result<Vec<u8>, ArchiveError> {
    let rules = if use_ignore_file {
        IgnoreRules::load(dir)?
    } else {
        None
    };

    match &rules {
        Some(rules) => pack_dir(dir, Some(rules as &dyn PathFilter)),
        None => pack_dir(dir, None),
    }
}

/// Extract a tar.gz buffer produced by [`pack_dir`] into `dest`,
/// creating it if needed.
pub fn unpack(data: &[u8], dest: &Path) -> Result<(), ArchiveError> {
    std::fs::create_dir_all(dest).map_err(|e| ArchiveError::Unpack {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let decoder = GzDecoder::new(data);
    let mut archive = tar::Archive::new(decoder);
    archive.unpack(dest).map_err(|e| ArchiveError::Unpack {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn append_tree<W: Write>(
    builder: &mut tar::Builder<W>,
    root: &Path,
    dir: &Path,
    filter: Option<&dyn PathFilter>,
) -> Result<(), ArchiveError> {
    let entries = std::fs::read_dir(dir).map_err(|e| pack_err(dir, e))?;
    let mut entries: Vec<_> = entries
        .collect::<Result<_, _>>()
        .map_err(|e| pack_err(dir, e))?;
    // Deterministic archive layout regardless of filesystem order.
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map_err(|e| {
                pack_err(
                    &path,
                    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()),
                )
            })?
            .to_path_buf();

        let file_type = entry.file_type().map_err(|e| pack_err(&path, e))?;
        let is_dir = file_type.is_dir();

        if let Some(filter) = filter {
            if filter.denies(&relative, is_dir) {
                debug!(path = %relative.display(), "excluded by ignore rules");
                continue;
            }
        }

        if is_dir {
            builder
                .append_dir(&relative, &path)
                .map_err(|e| pack_err(&path, e))?;
            append_tree(builder, root, &path, filter)?;
        } else {
            builder
                .append_path_with_name(&path, &relative)
                .map_err(|e| pack_err(&path, e))?;
        }
    }

    Ok(())
}

fn pack_err(path: &Path, source: std::io::Error) -> ArchiveError {
    ArchiveError::Pack {
        path: PathBuf::from(path),
        source,
    }
}
