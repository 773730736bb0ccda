//! Sidecar caching of parsed index files.
//!
//! Parsing a large index literal is pure CPU work, so a parsed snapshot is
//! kept next to the source file (`search_index.js` → `search_index.js.idx`)
//! in postcard form, keyed by an xxh3 digest of the source bytes. The cache
//! is invalidated whenever the generator rewrites the source; a stale or
//! corrupt sidecar is discarded and the source re-parsed. Cache failures are
//! never fatal and never change observable results.

use crate::error::Result;
use crate::record::IndexRecord;
use crate::store::IndexStore;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use xxhash_rust::xxh3::xxh3_64;

/// Sidecar file extension, appended to the source file name.
const SIDECAR_EXT: &str = "idx";

/// On-disk snapshot: digest of the source bytes plus the parsed records.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    digest: u64,
    records: Vec<IndexRecord>,
}

/// Sidecar path for an index file: `search_index.js` → `search_index.js.idx`.
fn sidecar_path(source: &Path) -> PathBuf {
    let mut name = source.as_os_str().to_owned();
    name.push(".");
    name.push(SIDECAR_EXT);
    PathBuf::from(name)
}

/// Loads an index file, using the sidecar snapshot when its digest matches
/// the current source bytes.
pub fn load_with_cache(path: &Path) -> Result<IndexStore> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read index file {}", path.display()))?;
    let digest = xxh3_64(&bytes);
    let sidecar = sidecar_path(path);

    if let Some(records) = load_snapshot(&sidecar, digest) {
        tracing::debug!(
            "Loaded {} records from sidecar {}",
            records.len(),
            sidecar.display()
        );
        return Ok(IndexStore::from_records(records));
    }

    let source = String::from_utf8(bytes)
        .with_context(|| format!("index file {} is not UTF-8", path.display()))?;
    let store = IndexStore::from_source(&source)
        .with_context(|| format!("failed to parse index file {}", path.display()))?;
    store_snapshot(&sidecar, digest, store.records());
    Ok(store)
}

/// Reads a snapshot if it exists and matches the source digest.
fn load_snapshot(sidecar: &Path, digest: u64) -> Option<Vec<IndexRecord>> {
    let bytes = std::fs::read(sidecar).ok()?;
    match postcard::from_bytes::<Snapshot>(&bytes) {
        Ok(snapshot) if snapshot.digest == digest => Some(snapshot.records),
        Ok(_) => {
            tracing::debug!("Sidecar {} is stale, re-parsing source", sidecar.display());
            None
        }
        Err(e) => {
            tracing::warn!(
                "Failed to deserialize sidecar {}: {}; re-parsing source",
                sidecar.display(),
                e
            );
            let _ = std::fs::remove_file(sidecar);
            None
        }
    }
}

/// Best-effort snapshot write; failures are logged and swallowed.
fn store_snapshot(sidecar: &Path, digest: u64, records: &[IndexRecord]) {
    let snapshot = Snapshot {
        digest,
        records: records.to_vec(),
    };
    match postcard::to_stdvec(&snapshot) {
        Ok(bytes) => {
            if let Err(e) = std::fs::write(sidecar, bytes) {
                tracing::warn!("Failed to write sidecar {}: {}", sidecar.display(), e);
            } else {
                tracing::debug!("Cached parsed index to {}", sidecar.display());
            }
        }
        Err(e) => tracing::warn!("Failed to serialize sidecar snapshot: {}", e),
    }
}
