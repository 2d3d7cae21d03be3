//! Consolidated test utilities for scratchpad
//!
//! This module provides unified testing utilities for integration tests:
//! throwaway workspaces (with or without a git checkout), scratch file
//! fixtures, and in-memory stand-ins for the editor host and the picker.

pub mod assertions;
pub mod fixtures;
pub mod host;
pub mod repository;
