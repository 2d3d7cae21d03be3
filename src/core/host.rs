//! [`EditorHost`] for the command line: the "window" is an editor process.
//!
//! The editor comes from `$VISUAL`, then `$EDITOR`, then `vi`. Creating a window
//! runs the editor on the scratch file and waits for it to exit, so by the time
//! the session closes the editor has already saved the file itself. For the same
//! reason `write_buffer` only checks the handle: the session's write-through on
//! close never touches the file with this host. The editor reports no cursor
//! back, so no position is remembered between runs.

use crate::core::error::{Result, ScratchpadError};
use crate::core::output::print_error;
use crate::core::session::{EditorHost, WindowRequest};
use crate::core::state::{BufferHandle, CursorPosition, WindowHandle};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

/// Exported to the editor process for scratch buffers
pub const SCRATCH_MARKER_ENV: &str = "SCRATCHPAD_BUFFER";

const FALLBACK_EDITOR: &str = "vi";

pub struct ExternalEditorHost {
    editor: String,
    next_id: u64,
    buffers: HashMap<BufferHandle, PathBuf>,
    windows: HashMap<WindowHandle, BufferHandle>,
}

impl ExternalEditorHost {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
            next_id: 0,
            buffers: HashMap::new(),
            windows: HashMap::new(),
        }
    }

    pub fn from_env() -> Self {
        let editor = ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string());
        Self::new(editor)
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    fn editor_command(&self) -> Option<Command> {
        let mut parts = self.editor.split_whitespace();
        let mut command = Command::new(parts.next()?);
        command.args(parts);
        Some(command)
    }
}

impl EditorHost for ExternalEditorHost {
    fn create_window(
        &mut self,
        request: &WindowRequest<'_>,
    ) -> Result<(WindowHandle, BufferHandle)> {
        let mut command = self.editor_command().ok_or_else(|| {
            ScratchpadError::window_creation_failed(request.path, "no editor configured")
        })?;
        command.arg(request.path);
        if request.scratch {
            command.env(SCRATCH_MARKER_ENV, "1");
        }

        log::debug!("Running {} on {}", self.editor, request.path.display());
        let status = command
            .status()
            .map_err(|e| ScratchpadError::window_creation_failed(request.path, e.to_string()))?;
        if !status.success() {
            return Err(ScratchpadError::window_creation_failed(
                request.path,
                format!("{} exited with {status}", self.editor),
            ));
        }

        self.next_id += 1;
        let window = WindowHandle(self.next_id);
        let buffer = BufferHandle(self.next_id);
        self.buffers.insert(buffer, request.path.to_path_buf());
        self.windows.insert(window, buffer);
        Ok((window, buffer))
    }

    fn write_buffer(&mut self, buffer: BufferHandle) -> Result<()> {
        // The editor process wrote the file before it exited
        match self.buffers.get(&buffer) {
            Some(path) => {
                log::debug!("Buffer {} already saved to {}", buffer.0, path.display());
                Ok(())
            }
            None => Err(ScratchpadError::invalid_argument(format!(
                "unknown buffer {}",
                buffer.0
            ))),
        }
    }

    fn cursor_position(&self, _window: WindowHandle) -> Option<CursorPosition> {
        None
    }

    fn close_window(&mut self, window: WindowHandle) {
        self.windows.remove(&window);
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        self.buffers.remove(&buffer);
    }

    fn notify(&mut self, message: &str) {
        print_error(message);
    }
}
