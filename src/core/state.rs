//! Data structures shared between the store and the session.
//!
//! # Public API
//! - [`ScratchFileRecord`]: A scratch file with its modification time
//! - [`WindowHandle`] / [`BufferHandle`]: Opaque ids handed out by the host editor
//! - [`CursorPosition`]: Row/column pair remembered between sessions
//! - [`ActiveScratch`]: The open window/buffer pair and the file behind it
//! - [`SessionState`]: The single piece of mutable session state
//!
//! Records are derived from the filesystem on every listing and never cached.
//! The window and buffer handles only ever live together inside
//! [`ActiveScratch`], so one can not be present without the other.

use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchFileRecord {
    pub path: PathBuf,
    pub modified_at: SystemTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u64);

/// 1-based row, 0-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub row: usize,
    pub col: usize,
}

impl CursorPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveScratch {
    pub window: WindowHandle,
    pub buffer: BufferHandle,
    pub path: PathBuf,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active: Option<ActiveScratch>,
    pub last_cursor: Option<CursorPosition>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

/// What the caller sees after `open`, `close` or `toggle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Open(ActiveScratch),
    Closed,
}

impl SessionStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}
