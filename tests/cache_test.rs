//! Sidecar cache behavior against real files.

use assert2::check;
use documenter_index::cache::load_with_cache;
use documenter_index::{Category, IndexStore, emit_index};
use std::path::PathBuf;
use tempfile::TempDir;

const RAW: &str = include_str!("../assets/search_index.js");

fn write_index(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("search_index.js");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Test: the first load parses the source and drops a sidecar next to it.
#[test]
fn first_load_writes_sidecar() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, RAW);

    let store = load_with_cache(&path).unwrap();

    check!(store == *IndexStore::load());
    check!(path.with_extension("js.idx").exists());
}

/// Test: a warm sidecar yields the same store as a cold parse.
#[test]
fn warm_load_matches_cold_load() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, RAW);

    let cold = load_with_cache(&path).unwrap();
    let warm = load_with_cache(&path).unwrap();

    check!(warm == cold);
    check!(warm.records() == cold.records());
}

/// Test: rewriting the source invalidates the sidecar.
#[test]
fn rewritten_source_invalidates_sidecar() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, RAW);
    let full = load_with_cache(&path).unwrap();

    // The generator replaces the file wholesale on every doc build.
    let truncated = emit_index(&full.records()[..3]);
    std::fs::write(&path, truncated).unwrap();

    let reloaded = load_with_cache(&path).unwrap();
    check!(reloaded.len() == 3);
}

/// Test: a corrupt sidecar is discarded and the source re-parsed.
#[test]
fn corrupt_sidecar_is_discarded() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, RAW);
    load_with_cache(&path).unwrap();

    let sidecar = path.with_extension("js.idx");
    std::fs::write(&sidecar, b"not postcard").unwrap();

    let store = load_with_cache(&path).unwrap();
    check!(store.len() == 104);
    check!(
        store.in_category(Category::Macro).count() == 1,
        "typed content survives a cache miss"
    );
}

/// Test: a direct uncached parse agrees with the cached path.
#[test]
fn direct_parse_matches_cached_load() {
    let dir = TempDir::new().unwrap();
    let path = write_index(&dir, RAW);

    let cached = load_with_cache(&path).unwrap();
    let direct = IndexStore::from_path(&path).unwrap();

    check!(direct == cached);
}

/// Test: a missing file is an error that names the path.
#[test]
fn missing_file_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.js");

    let err = load_with_cache(&path).unwrap_err();
    check!(format!("{:#}", err).contains("absent.js"));
}
