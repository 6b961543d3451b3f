//! Core copy operations.
//!
//! This module provides the chunked file-to-file copy with checked opens,
//! immediate end-of-stream detection, and scoped handle release.

mod file;
mod utils;

// Re-export public API
pub use file::{CopyStats, copy, copy_file};
