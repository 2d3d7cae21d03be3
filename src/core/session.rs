//! The open/closed state machine around a single scratch window.
//!
//! # Public API
//! - [`EditorHost`]: What the host editor has to provide (windows, buffers, cursor)
//! - [`WindowRequest`]: Everything the host needs to materialize a scratch window
//! - [`Session`]: Owns the host and the [`SessionState`]
//!
//! # States
//! - **Closed** (initial): no window, no buffer
//! - **Open**: exactly one window/buffer pair, recorded in [`ActiveScratch`]
//!
//! Opening while already open closes the current window first, so there is never
//! more than one scratch window. A host that fails to create the window leaves
//! the session closed; the failure is shown to the user through
//! [`EditorHost::notify`] and is not returned as an error.

use crate::core::config::FloatWindowStyle;
use crate::core::error::Result;
use crate::core::state::{
    ActiveScratch, BufferHandle, CursorPosition, SessionState, SessionStatus, WindowHandle,
};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct WindowRequest<'a> {
    pub path: &'a Path,
    pub cursor: Option<CursorPosition>,
    pub style: &'a FloatWindowStyle,
    /// Tag the buffer as a scratch buffer so editor tooling can skip it
    pub scratch: bool,
}

/// Window, buffer and cursor operations of the host editor
pub trait EditorHost {
    /// Create a buffer for `request.path` and show it in a floating window.
    fn create_window(
        &mut self,
        request: &WindowRequest<'_>,
    ) -> Result<(WindowHandle, BufferHandle)>;

    /// Persist the buffer content to its file.
    fn write_buffer(&mut self, buffer: BufferHandle) -> Result<()>;

    /// Cursor of the window, if the host can tell.
    fn cursor_position(&self, window: WindowHandle) -> Option<CursorPosition>;

    fn close_window(&mut self, window: WindowHandle);

    fn delete_buffer(&mut self, buffer: BufferHandle);

    /// Show a non-fatal message to the user.
    fn notify(&mut self, message: &str);
}

pub struct Session<H: EditorHost> {
    host: H,
    state: SessionState,
}

impl<H: EditorHost> Session<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: SessionState::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn active(&self) -> Option<&ActiveScratch> {
        self.state.active.as_ref()
    }

    pub fn last_cursor(&self) -> Option<CursorPosition> {
        self.state.last_cursor
    }

    pub fn status(&self) -> SessionStatus {
        match &self.state.active {
            Some(active) => SessionStatus::Open(active.clone()),
            None => SessionStatus::Closed,
        }
    }

    /// Show `path` in a scratch window, restoring the remembered cursor.
    pub fn open(&mut self, path: &Path, style: &FloatWindowStyle) -> Result<SessionStatus> {
        self.close()?;

        let request = WindowRequest {
            path,
            cursor: self.state.last_cursor,
            style,
            scratch: true,
        };

        match self.host.create_window(&request) {
            Ok((window, buffer)) => {
                log::debug!(
                    "Opened {} in window {} / buffer {}",
                    path.display(),
                    window.0,
                    buffer.0
                );
                self.state.active = Some(ActiveScratch {
                    window,
                    buffer,
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                log::warn!("Window creation failed for {}: {e}", path.display());
                self.host.notify(&format!("Failed to open scratch file: {e}"));
            }
        }

        Ok(self.status())
    }

    /// Write the buffer, remember the cursor and tear the window down.
    ///
    /// Does nothing when no scratch window is open. If the write fails the
    /// window stays open and the error is returned.
    pub fn close(&mut self) -> Result<()> {
        let Some(active) = self.state.active.as_ref() else {
            return Ok(());
        };
        let (window, buffer) = (active.window, active.buffer);

        self.host.write_buffer(buffer)?;
        if let Some(cursor) = self.host.cursor_position(window) {
            self.state.last_cursor = Some(cursor);
        }
        self.host.close_window(window);
        self.host.delete_buffer(buffer);

        if let Some(closed) = self.state.active.take() {
            log::debug!("Closed scratch window for {}", closed.path.display());
        }
        Ok(())
    }
}
