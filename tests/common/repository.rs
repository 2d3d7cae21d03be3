//! Workspace and git repository setup utilities
//!
//! Every test workspace is a directory called `proj` inside a temporary
//! directory, next to a separate temporary scratch root.

#![allow(dead_code)]

use scratchpad::core::error::{Result, ScratchpadError};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const WORKSPACE_NAME: &str = "proj";

/// The TempDirs must be kept alive for the duration of the test to prevent
/// cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub scratch_root: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Path {
        self.scratch_root.path()
    }

    /// Where scratch files of this workspace land when there is no branch
    pub fn plain_scratch_dir(&self) -> PathBuf {
        self.root().join(WORKSPACE_NAME)
    }
}

/// Sets up a workspace directory that is not a git repository
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let scratch_root = TempDir::new()?;
    let path = temp_dir.path().join(WORKSPACE_NAME);
    std::fs::create_dir(&path)?;

    Ok(TestWorkspace {
        temp_dir,
        scratch_root,
        path,
    })
}

/// Runs git in `repo_path`, failing on a non-zero exit
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Test User",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "init.defaultBranch=main",
        ])
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        return Err(ScratchpadError::external_tool_unavailable(
            "git",
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(())
}

/// Sets up a workspace that is a git repository with one commit on `main`
pub fn setup_git_workspace() -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;

    git(&workspace.path, &["init"])?;
    std::fs::write(workspace.path.join("README.md"), "initial content\n")?;
    git(&workspace.path, &["add", "README.md"])?;
    git(&workspace.path, &["commit", "-m", "Initial commit"])?;

    Ok(workspace)
}

/// Sets up a git workspace and checks out a new branch
pub fn setup_git_workspace_on_branch(branch: &str) -> Result<TestWorkspace> {
    let workspace = setup_git_workspace()?;
    git(&workspace.path, &["checkout", "-b", branch])?;
    Ok(workspace)
}

/// Sets up a git workspace with a detached HEAD
pub fn setup_detached_workspace() -> Result<TestWorkspace> {
    let workspace = setup_git_workspace()?;
    git(&workspace.path, &["checkout", "--detach"])?;
    Ok(workspace)
}
