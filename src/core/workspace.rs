//! Per-workspace, per-branch scratch directory resolution.
//!
//! A workspace is identified by the final segment of its working directory.
//! When the workspace sits in a git checkout with a named branch, the branch
//! becomes an extra directory level, so every branch keeps its own notes:
//!
//! ```text
//! <scratch_root>/<workspace>/            no repository or detached HEAD
//! <scratch_root>/<workspace>/<branch>/   on a branch
//! ```

use crate::core::error::{Result, ScratchpadError};
use crate::core::git::{current_branch_with, DEFAULT_GIT_TIMEOUT};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name used when the working directory has no final segment (e.g. `/`)
const ROOT_WORKSPACE_NAME: &str = "root";

#[derive(Debug, Clone)]
pub struct Workspace {
    cwd: PathBuf,
    git: PathBuf,
    git_timeout: Duration,
}

impl Workspace {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            git: PathBuf::from("git"),
            git_timeout: DEFAULT_GIT_TIMEOUT,
        }
    }

    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            log::warn!("Failed to read current directory: {e}");
            ScratchpadError::CurrentDirectoryUnavailable
        })?;
        Ok(Self::new(cwd))
    }

    pub fn with_git_timeout(mut self, timeout: Duration) -> Self {
        self.git_timeout = timeout;
        self
    }

    /// Look the branch up with `program` instead of the `git` on `PATH`
    pub fn with_git_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.git = program.into();
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn name(&self) -> String {
        self.cwd
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| ROOT_WORKSPACE_NAME.to_string())
    }

    /// Current branch, or `None` outside a repository, on a detached HEAD,
    /// or when git can not be run.
    pub fn branch(&self) -> Option<String> {
        match current_branch_with(&self.git, &self.cwd, self.git_timeout) {
            Ok(branch) => branch,
            Err(e) => {
                log::debug!("No branch for {}: {e}", self.cwd.display());
                None
            }
        }
    }

    /// Scratch directory for this workspace below `root`, without touching disk
    pub fn scratch_directory(&self, root: &Path) -> PathBuf {
        let dir = root.join(self.name());
        match self.branch() {
            Some(branch) => dir.join(branch),
            None => dir,
        }
    }

    /// Scratch directory for this workspace below `root`, created if missing
    pub fn resolve_scratch_directory(&self, root: &Path) -> Result<PathBuf> {
        let dir = self.scratch_directory(root);
        std::fs::create_dir_all(&dir).map_err(|e| {
            log::warn!("Failed to create scratch directory {}: {e}", dir.display());
            ScratchpadError::directory_creation_failed(&dir, e)
        })?;
        log::debug!("Resolved scratch directory {}", dir.display());
        Ok(dir)
    }
}

/// Resolve the scratch directory for the process working directory
pub fn resolve_scratch_directory(root: &Path) -> Result<PathBuf> {
    Workspace::from_current_dir()?.resolve_scratch_directory(root)
}
