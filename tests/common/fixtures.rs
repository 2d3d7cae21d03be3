//! Scratch file fixtures with controlled modification times

#![allow(dead_code)]

use scratchpad::core::error::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Creates `name` in `dir` with a modification time `age_secs` in the past
pub fn create_aged_file(dir: &Path, name: &str, age_secs: u64) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    let file = File::create(&path)?;
    file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))?;
    Ok(path)
}

/// Creates several aged files, returning their paths in the given order
pub fn create_aged_files(dir: &Path, files: &[(&str, u64)]) -> Result<Vec<PathBuf>> {
    files
        .iter()
        .map(|(name, age)| create_aged_file(dir, name, *age))
        .collect()
}

pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).filter(|e| e.path().is_file()).count())
        .unwrap_or(0)
}
