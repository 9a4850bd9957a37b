use std::path::Path;

use airlift_archive::{pack_dir, pack_dir_with_ignore_file, unpack, ArchiveError, IgnoreRules};
use tempfile::TempDir;

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn extract(data: &[u8]) -> TempDir {
    let out = TempDir::new().unwrap();
    unpack(data, out.path()).unwrap();
    out
}

// ── Round-trip ──

#[test]
fn round_trip_preserves_paths_and_contents() {
    let src = TempDir::new().unwrap();
    write(src.path(), "Procfile", "web: ./server");
    write(src.path(), "src/main.py", "print('hi')");
    write(src.path(), "src/util/helpers.py", "# helpers");
    write(src.path(), "static/index.html", "<h1>hello</h1>");

    let data = pack_dir(src.path(), None).unwrap();
    assert!(!data.is_empty());

    let out = extract(&data);
    for (rel, content) in [
        ("Procfile", "web: ./server"),
        ("src/main.py", "print('hi')"),
        ("src/util/helpers.py", "# helpers"),
        ("static/index.html", "<h1>hello</h1>"),
    ] {
        let extracted = std::fs::read_to_string(out.path().join(rel)).unwrap();
        assert_eq!(extracted, content, "mismatch for {rel}");
    }
}

#[test]
fn round_trip_preserves_empty_directories() {
    let src = TempDir::new().unwrap();
    std::fs::create_dir(src.path().join("logs")).unwrap();
    write(src.path(), "app.rb", "puts :ok");

    let data = pack_dir(src.path(), None).unwrap();
    let out = extract(&data);

    assert!(out.path().join("logs").is_dir());
    assert!(out.path().join("app.rb").is_file());
}

#[test]
fn pack_empty_directory_produces_extractable_archive() {
    let src = TempDir::new().unwrap();

    let data = pack_dir(src.path(), None).unwrap();
    let out = extract(&data);

    assert!(out.path().exists());
}

// ── Ignore filtering ──

#[test]
fn ignore_file_excludes_denied_entries() {
    let src = TempDir::new().unwrap();
    write(src.path(), ".gitignore", "node_modules\n");
    write(src.path(), "index.js", "require('lib')");
    write(src.path(), "node_modules/lib/index.js", "module.exports = {}");

    let data = pack_dir_with_ignore_file(src.path(), true).unwrap();
    let out = extract(&data);

    assert!(!out.path().join("node_modules").exists());
    assert!(out.path().join("index.js").is_file());
    // The ignore file itself is packaged like any other entry.
    assert!(out.path().join(".gitignore").is_file());
}

#[test]
fn negation_pattern_reincludes_file() {
    let src = TempDir::new().unwrap();
    write(src.path(), ".gitignore", "*.log\n!keep.log\n");
    write(src.path(), "debug.log", "noise");
    write(src.path(), "keep.log", "signal");
    write(src.path(), "main.go", "package main");

    let data = pack_dir_with_ignore_file(src.path(), true).unwrap();
    let out = extract(&data);

    assert!(!out.path().join("debug.log").exists());
    assert!(out.path().join("keep.log").is_file());
    assert!(out.path().join("main.go").is_file());
}

#[test]
fn flag_off_packs_everything() {
    let src = TempDir::new().unwrap();
    write(src.path(), ".gitignore", "vendor\n");
    write(src.path(), "vendor/dep.rb", "DEP = 1");

    let data = pack_dir_with_ignore_file(src.path(), false).unwrap();
    let out = extract(&data);

    assert!(out.path().join("vendor/dep.rb").is_file());
}

#[test]
fn missing_ignore_file_is_a_noop() {
    let src = TempDir::new().unwrap();
    write(src.path(), "app.js", "console.log('hi')");

    let data = pack_dir_with_ignore_file(src.path(), true).unwrap();
    let out = extract(&data);

    assert!(out.path().join("app.js").is_file());
}

#[test]
fn injected_rules_prune_whole_subtree() {
    let src = TempDir::new().unwrap();
    write(src.path(), "target/debug/app", "binary");
    write(src.path(), "src/lib.rs", "pub fn lib() {}");

    let rules = IgnoreRules::from_patterns(src.path(), "target/\n").unwrap();
    let data = pack_dir(src.path(), Some(&rules)).unwrap();
    let out = extract(&data);

    assert!(!out.path().join("target").exists());
    assert!(out.path().join("src/lib.rs").is_file());
}

// ── Invalid inputs ──

#[test]
fn pack_nonexistent_path_fails() {
    let result = pack_dir(Path::new("/no/such/dir"), None);
    assert!(matches!(result, Err(ArchiveError::NotADirectory { .. })));
}

#[test]
fn pack_regular_file_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("archive.txt");
    std::fs::write(&file, "not a directory").unwrap();

    let result = pack_dir(&file, None);
    assert!(matches!(result, Err(ArchiveError::NotADirectory { .. })));
}

#[test]
fn convenience_wrapper_reports_missing_directory() {
    let result = pack_dir_with_ignore_file(Path::new("/no/such/dir"), true);
    assert!(matches!(result, Err(ArchiveError::NotADirectory { .. })));
}
