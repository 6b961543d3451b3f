//! Configuration options for copy operations.
//!
//! # Example
//!
//! ```
//! use chunkcopy::CopyOptions;
//!
//! let options = CopyOptions::default()
//!     .with_buffer_size(64 * 1024)
//!     .with_fsync();
//! assert_eq!(options.buffer_size, 65536);
//! ```

use crate::event::{CopyEvent, EventHandler};

/// Capacity of the transfer buffer when none is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Options for copy operations.
///
/// Use [`Default::default()`] to get sensible defaults, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `buffer_size` | 1024 | Transfer buffer capacity in bytes |
/// | `fsync` | `false` | Sync destination to disk before returning |
/// | `event_handler` | `None` | Receive progress events |
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Capacity of the transfer buffer, in bytes (default: 1024)
    ///
    /// Each read fills at most this many bytes, and each chunk is written
    /// in full before the next read.
    pub buffer_size: usize,

    /// Whether to sync the destination to disk after writing (default: false)
    pub fsync: bool,

    /// Callback for copy events (optional)
    ///
    /// If not set and `tracing` feature is enabled, events are logged via tracing.
    /// Otherwise, events are silently dropped.
    pub event_handler: Option<EventHandler>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            fsync: false,
            event_handler: None,
        }
    }
}

impl CopyOptions {
    /// Set the transfer buffer capacity
    ///
    /// Value is clamped to at least 1 so the copy always makes progress.
    #[must_use]
    pub fn with_buffer_size(mut self, bytes: usize) -> Self {
        self.buffer_size = bytes.max(1);
        self
    }

    /// Sync the destination to disk before reporting success
    #[must_use]
    pub fn with_fsync(mut self) -> Self {
        self.fsync = true;
        self
    }

    /// Create options with an event handler
    #[must_use]
    pub fn with_event_handler(mut self, handler: EventHandler) -> Self {
        self.event_handler = Some(handler);
        self
    }

    pub(crate) fn emit(&self, event: &CopyEvent<'_>) {
        if let Some(handler) = self.event_handler {
            handler(event);
        } else {
            #[cfg(feature = "tracing")]
            crate::event::log(event);
        }
    }
}
