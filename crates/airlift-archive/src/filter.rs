use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::ArchiveError;

/// Ignore-pattern file consulted at the root of a packaged directory.
pub const IGNORE_FILE: &str = ".gitignore";

/// Decides which relative paths are excluded from a package.
///
/// The packer calls this for every entry it visits; pattern syntax is
/// entirely the implementation's concern.
pub trait PathFilter {
    /// `true` excludes `relative` (and, for directories, everything
    /// beneath it) from the archive.
    fn denies(&self, relative: &Path, is_dir: bool) -> bool;
}

/// Compiled gitignore rules for one directory root.
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Compile the ignore file at the root of `dir`, or `None` when no
    /// such file exists.
    pub fn load(dir: &Path) -> Result<Option<Self>, ArchiveError> {
        let path = dir.join(IGNORE_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let mut builder = GitignoreBuilder::new(dir);
        if let Some(err) = builder.add(&path) {
            return Err(ArchiveError::IgnoreParse { path, source: err });
        }
        let matcher = builder
            .build()
            .map_err(|e| ArchiveError::IgnoreParse { path, source: e })?;

        Ok(Some(Self { matcher }))
    }

    /// Compile rules from pattern text, one pattern per line.
    pub fn from_patterns(dir: &Path, patterns: &str) -> Result<Self, ArchiveError> {
        let mut builder = GitignoreBuilder::new(dir);
        for line in patterns.lines() {
            builder
                .add_line(None, line)
                .map_err(|e| ArchiveError::IgnoreParse {
                    path: dir.join(IGNORE_FILE),
                    source: e,
                })?;
        }
        let matcher = builder.build().map_err(|e| ArchiveError::IgnoreParse {
            path: dir.join(IGNORE_FILE),
            source: e,
        })?;

        Ok(Self { matcher })
    }
}

impl PathFilter for IgnoreRules {
    fn denies(&self, relative: &Path, is_dir: bool) -> bool {
        self.matcher.matched(relative, is_dir).is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pattern_denies_matching_path() {
        let rules = IgnoreRules::from_patterns(Path::new(""), "node_modules\n").unwrap();
        assert!(rules.denies(Path::new("node_modules"), true));
        assert!(!rules.denies(Path::new("src"), true));
    }

    #[test]
    fn negation_reincludes_path() {
        let rules = IgnoreRules::from_patterns(Path::new(""), "*.log\n!keep.log\n").unwrap();
        assert!(rules.denies(Path::new("debug.log"), false));
        assert!(!rules.denies(Path::new("keep.log"), false));
    }

    #[test]
    fn later_pattern_overrides_earlier() {
        let rules = IgnoreRules::from_patterns(Path::new(""), "!build\nbuild\n").unwrap();
        assert!(rules.denies(Path::new("build"), true));
    }

    #[test]
    fn directory_only_pattern_spares_file_of_same_name() {
        let rules = IgnoreRules::from_patterns(Path::new(""), "target/\n").unwrap();
        assert!(rules.denies(Path::new("target"), true));
        assert!(!rules.denies(Path::new("target"), false));
    }

    #[test]
    fn load_returns_none_without_ignore_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(IgnoreRules::load(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn load_compiles_ignore_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(IGNORE_FILE), "dist\n").unwrap();

        let rules = IgnoreRules::load(tmp.path()).unwrap().unwrap();
        assert!(rules.denies(Path::new("dist"), true));
    }
}
