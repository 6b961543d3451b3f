//! Builder API for ergonomic copying operations.
//!
//! The builder pattern provides a fluent interface for configuring and executing
//! a copy. This is often more convenient than manually constructing
//! [`CopyOptions`].
//!
//! # Examples
//!
//! ```no_run
//! use chunkcopy::CopyBuilder;
//!
//! let stats = CopyBuilder::new("input.bin", "output.bin")
//!     .buffer_size(8192)
//!     .run()?;
//! println!("Copied {} bytes", stats.bytes_copied);
//! # Ok::<(), chunkcopy::Error>(())
//! ```

use crate::copy::{CopyStats, copy_file};
use crate::error::Result;
use crate::event::EventHandler;
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};

/// A builder for configuring and executing a copy.
#[derive(Debug, Clone)]
pub struct CopyBuilder {
    src: PathBuf,
    dst: PathBuf,
    options: CopyOptions,
}

impl CopyBuilder {
    /// Create a new `CopyBuilder` with the given source and destination paths.
    ///
    /// Uses default options (1024-byte buffer, no fsync, no event handler).
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Self {
        Self {
            src: src.as_ref().to_path_buf(),
            dst: dst.as_ref().to_path_buf(),
            options: CopyOptions::default(),
        }
    }

    /// Set the transfer buffer capacity in bytes.
    ///
    /// Values below 1 are raised to 1.
    #[must_use]
    pub fn buffer_size(mut self, bytes: usize) -> Self {
        self.options = self.options.with_buffer_size(bytes);
        self
    }

    /// Sync the destination to disk before returning.
    #[must_use]
    pub fn fsync(mut self) -> Self {
        self.options = self.options.with_fsync();
        self
    }

    /// Receive every copy event in `handler` instead of the default logging.
    #[must_use]
    pub fn on_event(mut self, handler: EventHandler) -> Self {
        self.options = self.options.with_event_handler(handler);
        self
    }

    /// Get a reference to the configured options.
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy.
    ///
    /// # Errors
    ///
    /// See [`copy_file`](crate::copy_file).
    pub fn run(self) -> Result<CopyStats> {
        copy_file(&self.src, &self.dst, &self.options)
    }
}
