//! Directory listing ordered by recency.
//!
//! Only direct children that are regular files count as scratch files. Entries
//! whose metadata can not be read are skipped, and a missing directory is just
//! an empty listing. Files with the same modification time keep the order the
//! platform enumerated them in.

use crate::core::state::ScratchFileRecord;
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

/// Collect the qualifying entries of `directory`, newest first
pub fn scan_directory(directory: &Path) -> Vec<ScratchFileRecord> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Cannot read {}: {e}", directory.display());
            return Vec::new();
        }
    };

    let mut records: Vec<ScratchFileRecord> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let metadata = entry.metadata().ok()?;
            if !metadata.is_file() {
                return None;
            }
            let modified_at = metadata.modified().ok()?;
            Some(ScratchFileRecord {
                path: entry.path(),
                modified_at,
            })
        })
        .collect();

    records.sort_by_key(|record| Reverse(record.modified_at));
    log::debug!(
        "Found {} scratch files in {}",
        records.len(),
        directory.display()
    );
    records
}

/// Full paths of the scratch files in `directory`, most recently modified first
pub fn list_files_by_recency(directory: &Path) -> Vec<PathBuf> {
    scan_directory(directory)
        .into_iter()
        .map(|record| record.path)
        .collect()
}
