//! Core functionality for the scratchpad tool.
//!
//! This module provides the building blocks for locating, creating and listing
//! scratch files, and the session that keeps at most one scratch window open.

pub mod config;
pub mod dirs;
pub mod error;
pub mod filename;
pub mod git;
pub mod host;
pub mod lister;
pub mod logging;
pub mod output;
pub mod picker;
pub mod plugin;
pub mod session;
pub mod state;
pub mod store;
pub mod workspace;

// === Error handling ===
pub use error::{Result, ScratchpadError};

// === Configuration ===
pub use config::{
    Config, ConfigOverrides, FloatWindowStyle, LogLevel, PickerProvider, WindowGeometry,
    WindowPosition,
};

// === Workspace resolution ===
// Maps the working directory (and git branch) to a scratch directory
pub use workspace::{resolve_scratch_directory, Workspace};

// === Files ===
pub use filename::synthesize_default_filename;
pub use lister::{list_files_by_recency, scan_directory};
pub use store::{create_named_scratch_file, get_or_create_latest_scratch_file, list_scratch_files};

// === Session ===
pub use session::{EditorHost, Session, WindowRequest};
pub use state::{
    ActiveScratch, BufferHandle, CursorPosition, ScratchFileRecord, SessionState, SessionStatus,
    WindowHandle,
};

// === Pickers and hosts ===
pub use host::{ExternalEditorHost, SCRATCH_MARKER_ENV};
pub use picker::{picker_for, BuiltinPicker, CommandPicker, Picker};

// === Entry point ===
pub use plugin::Scratchpad;

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
