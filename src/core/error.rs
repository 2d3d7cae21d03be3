//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ScratchpadError`] which covers every failure mode of the
//! scratch file workflow. It uses `thiserror` for ergonomic error definitions and
//! includes constructor helpers for the variants that carry context.
//!
//! # Public API
//! - [`ScratchpadError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ScratchpadError>`
//!
//! # Error Categories
//! - **Arguments**: Missing filename and extension, bad picker input
//! - **File operations**: Directory creation, file creation, buffer writes
//! - **External tools**: git, picker programs, the editor process
//! - **Configuration**: Unreadable or malformed config files

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for scratchpad
#[derive(Error, Debug)]
pub enum ScratchpadError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create scratch directory '{path}': {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create scratch file '{path}': {source}")]
    FileCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scratch buffer to '{path}': {source}")]
    BufferWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not determine the current working directory")]
    CurrentDirectoryUnavailable,

    // External collaborators
    #[error("External tool '{tool}' is unavailable: {reason}")]
    ExternalToolUnavailable { tool: String, reason: String },

    #[error("Could not open a window for '{path}': {reason}")]
    WindowCreationFailed { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using ScratchpadError
pub type Result<T> = std::result::Result<T, ScratchpadError>;

impl ScratchpadError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a directory creation failed error
    pub fn directory_creation_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a file creation failed error
    pub fn file_creation_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a buffer write failed error
    pub fn buffer_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::BufferWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an external tool unavailable error
    pub fn external_tool_unavailable(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExternalToolUnavailable {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a window creation failed error
    pub fn window_creation_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::WindowCreationFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error belongs to the filesystem family
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::DirectoryCreationFailed { .. }
                | Self::FileCreationFailed { .. }
                | Self::BufferWriteFailed { .. }
        )
    }
}
