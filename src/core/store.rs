//! Locating and creating scratch files.
//!
//! Files are always opened in append-or-create mode so an existing file with the
//! same name is never truncated.

use crate::core::error::{Result, ScratchpadError};
use crate::core::filename::synthesize_default_filename;
use crate::core::lister::list_files_by_recency;
use crate::core::workspace::Workspace;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Return the most recent scratch file of the workspace, creating one if the
/// scratch directory is empty.
pub fn get_or_create_latest_scratch_file(
    workspace: &Workspace,
    root: &Path,
    extension: &str,
) -> Result<PathBuf> {
    let directory = workspace.resolve_scratch_directory(root)?;

    if let Some(latest) = list_files_by_recency(&directory).into_iter().next() {
        log::debug!("Latest scratch file is {}", latest.display());
        return Ok(latest);
    }

    log::debug!("No scratch files in {}, creating one", directory.display());
    create_named_scratch_file(&directory, Some(extension), None)
}

/// Create a scratch file in `directory`.
///
/// A non-empty `name` is used verbatim; otherwise a default name is synthesized
/// from `extension`. At least one of the two is required.
pub fn create_named_scratch_file(
    directory: &Path,
    extension: Option<&str>,
    name: Option<&str>,
) -> Result<PathBuf> {
    let filename = match (
        name.filter(|n| !n.is_empty()),
        extension.filter(|e| !e.is_empty()),
    ) {
        (Some(name), _) => name.to_string(),
        (None, Some(extension)) => synthesize_default_filename(extension),
        (None, None) => {
            return Err(ScratchpadError::invalid_argument(
                "a filename or a file extension is required",
            ))
        }
    };

    let path = directory.join(filename);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            log::warn!("Failed to create {}: {e}", path.display());
            ScratchpadError::file_creation_failed(&path, e)
        })?;

    log::debug!("Created scratch file {}", path.display());
    Ok(path)
}

/// Scratch files of the workspace, newest first. Never creates files.
pub fn list_scratch_files(workspace: &Workspace, root: &Path) -> Result<Vec<PathBuf>> {
    let directory = workspace.resolve_scratch_directory(root)?;
    Ok(list_files_by_recency(&directory))
}
