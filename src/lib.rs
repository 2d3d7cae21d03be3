//! Scratchpad - quick scratch files scoped to the current workspace and git branch.
//!
//! Scratch files live under `<scratch_root>/<workspace>/[<branch>/]`. The library
//! resolves that directory, lists the files newest first, synthesizes unique
//! names for new ones, and drives a single scratch window through an
//! [`EditorHost`] supplied by the embedding editor.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`Scratchpad`]: entry point with `setup`, `open`, `close`, `toggle`, `create`, `list`
//! - [`EditorHost`] and [`Picker`]: the seams towards the editor and the selection UI
//! - [`Config`]: user configuration merged over defaults

pub mod commands;
pub mod core;

pub use crate::core::{
    create_named_scratch_file,
    get_or_create_latest_scratch_file,
    list_files_by_recency,
    picker_for,
    resolve_scratch_directory,
    synthesize_default_filename,

    ActiveScratch,
    BufferHandle,
    Config,
    CursorPosition,
    EditorHost,
    ExternalEditorHost,
    PickerProvider,
    Picker,
    Result,
    ScratchFileRecord,
    Scratchpad,
    ScratchpadError,
    SessionStatus,
    WindowHandle,
    WindowRequest,
    Workspace,
};
