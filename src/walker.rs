//! Repository Walker - single-pass traversal and per-file dispatch.
//!
//! Visits every file under the root in sorted order, gates on the supported
//! extension set, and concatenates whatever each extractor returns. All
//! per-file failures (unreadable files, malformed encodings) degrade to zero
//! records for that file; the walk itself always completes.

use crate::extractors::{self, SymbolRecord};
use crate::language::Language;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Extract symbol records from every supported file under `root`.
///
/// Synchronous and non-incremental: the full concatenated sequence is
/// returned once traversal completes. Symlinks are not followed.
pub fn analyze_repository(root: &Path) -> Vec<SymbolRecord> {
    let mut records = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
    {
        let path = entry.path();
        let Some(language) = Language::from_path(path) else {
            continue; // unsupported extension: not even dispatched
        };
        records.extend(extract_file(language, path));
    }

    debug!("extracted {} records from {}", records.len(), root.display());
    records
}

fn extract_file(language: Language, path: &Path) -> Vec<SymbolRecord> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("skipping unreadable file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    // Malformed encodings must not abort the run, only this file.
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            debug!("skipping non-UTF-8 file {}", path.display());
            return Vec::new();
        }
    };

    extractors::extract(language, path, &content)
}
