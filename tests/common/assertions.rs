//! Predicates for scratch file names and CLI output

#![allow(dead_code)]

use predicates::prelude::*;
use std::path::Path;

/// `YYYY-MM-DD-HH-mm-xxxxxxxx.<extension>`
pub fn is_default_filename(name: &str, extension: &str) -> bool {
    let Some(stem) = name.strip_suffix(&format!(".{extension}")) else {
        return false;
    };
    let parts: Vec<&str> = stem.split('-').collect();
    parts.len() == 6
        && parts[..5]
            .iter()
            .zip([4, 2, 2, 2, 2])
            .all(|(part, width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()))
        && parts[5].len() == 8
        && parts[5]
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

pub fn has_default_filename(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| is_default_filename(name, extension))
        .unwrap_or(false)
}

/// Creates a predicate that checks for window creation failures shown to the user
pub fn window_failure() -> impl Predicate<str> {
    predicates::str::contains("Failed to open scratch file")
}

/// Creates a predicate that checks for a saved scratch file message
pub fn saved() -> impl Predicate<str> {
    predicates::str::contains("Saved")
}
