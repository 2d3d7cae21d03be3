//! In-memory editor host and scripted picker
//!
//! [`RecordingHost`] keeps buffer contents in memory, loads them from disk when a
//! window opens and writes them back on `write_buffer`, which is enough to check
//! that closing a session persists what the user typed.

#![allow(dead_code)]

use scratchpad::core::error::{Result, ScratchpadError};
use scratchpad::core::picker::Picker;
use scratchpad::core::session::{EditorHost, WindowRequest};
use scratchpad::core::state::{BufferHandle, CursorPosition, WindowHandle};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct OpenedWindow {
    pub path: PathBuf,
    pub cursor: Option<CursorPosition>,
    pub scratch: bool,
}

#[derive(Default)]
pub struct RecordingHost {
    next_id: u64,
    pub fail_create: bool,
    pub buffers: HashMap<BufferHandle, (PathBuf, String)>,
    pub cursors: HashMap<WindowHandle, CursorPosition>,
    pub opened: Vec<OpenedWindow>,
    pub closed_windows: Vec<WindowHandle>,
    pub deleted_buffers: Vec<BufferHandle>,
    pub messages: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    /// Simulate the user typing into the buffer
    pub fn type_text(&mut self, buffer: BufferHandle, text: &str) {
        if let Some((_, content)) = self.buffers.get_mut(&buffer) {
            content.push_str(text);
        }
    }

    pub fn move_cursor(&mut self, window: WindowHandle, cursor: CursorPosition) {
        self.cursors.insert(window, cursor);
    }

    pub fn open_windows(&self) -> usize {
        self.cursors.len()
    }
}

impl EditorHost for RecordingHost {
    fn create_window(
        &mut self,
        request: &WindowRequest<'_>,
    ) -> Result<(WindowHandle, BufferHandle)> {
        self.opened.push(OpenedWindow {
            path: request.path.to_path_buf(),
            cursor: request.cursor,
            scratch: request.scratch,
        });
        if self.fail_create {
            return Err(ScratchpadError::window_creation_failed(
                request.path,
                "window budget exhausted",
            ));
        }

        self.next_id += 1;
        let window = WindowHandle(self.next_id);
        let buffer = BufferHandle(self.next_id);
        let content = std::fs::read_to_string(request.path).unwrap_or_default();
        self.buffers.insert(buffer, (request.path.to_path_buf(), content));
        self.cursors.insert(window, request.cursor.unwrap_or(CursorPosition::new(1, 0)));
        Ok((window, buffer))
    }

    fn write_buffer(&mut self, buffer: BufferHandle) -> Result<()> {
        let (path, content) = self
            .buffers
            .get(&buffer)
            .ok_or_else(|| ScratchpadError::invalid_argument("unknown buffer"))?;
        std::fs::write(path, content)
            .map_err(|e| ScratchpadError::buffer_write_failed(path, e))
    }

    fn cursor_position(&self, window: WindowHandle) -> Option<CursorPosition> {
        self.cursors.get(&window).copied()
    }

    fn close_window(&mut self, window: WindowHandle) {
        self.cursors.remove(&window);
        self.closed_windows.push(window);
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        self.buffers.remove(&buffer);
        self.deleted_buffers.push(buffer);
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Picker that always answers with the same index (or cancels with `None`)
/// and records every list it was shown
pub struct ScriptedPicker {
    choice: Option<usize>,
    pub presented: Rc<RefCell<Vec<Vec<PathBuf>>>>,
}

impl ScriptedPicker {
    pub fn choosing(choice: Option<usize>) -> (Self, Rc<RefCell<Vec<Vec<PathBuf>>>>) {
        let presented = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                choice,
                presented: Rc::clone(&presented),
            },
            presented,
        )
    }
}

impl Picker for ScriptedPicker {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn present(
        &self,
        entries: &[PathBuf],
        on_confirm: &mut dyn FnMut(PathBuf) -> Result<()>,
    ) -> Result<()> {
        self.presented.borrow_mut().push(entries.to_vec());
        match self.choice.and_then(|index| entries.get(index)) {
            Some(selected) => on_confirm(selected.clone()),
            None => Ok(()),
        }
    }
}
