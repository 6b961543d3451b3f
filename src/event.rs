//! Copy progress and milestone events.

use std::path::Path;

/// Callback receiving every [`CopyEvent`] of a copy.
pub type EventHandler = fn(&CopyEvent<'_>);

/// A notification emitted while a copy is in progress.
///
/// Events are diagnostic only. They never change the outcome of a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CopyEvent<'a> {
    /// The source was opened for reading.
    SourceOpened {
        /// Source path
        path: &'a Path,
        /// Source length reported by the filesystem at open time
        len: u64,
    },
    /// The destination was created or truncated and is open for writing.
    DestinationOpened {
        /// Destination path
        path: &'a Path,
    },
    /// A chunk was read into the transfer buffer.
    ChunkRead {
        /// Zero-based chunk index
        index: u64,
        /// Bytes in this chunk
        bytes: usize,
    },
    /// A chunk was written to the destination.
    ChunkWritten {
        /// Zero-based chunk index
        index: u64,
        /// Bytes in this chunk
        bytes: usize,
    },
    /// The copy finished successfully.
    Completed {
        /// Total bytes copied
        bytes: u64,
        /// Number of chunks transferred
        chunks: u64,
    },
}

#[cfg(feature = "tracing")]
pub(crate) fn log(event: &CopyEvent<'_>) {
    match *event {
        CopyEvent::SourceOpened { path, len } => {
            tracing::info!(len, "Source {} is open for reading", path.display());
        }
        CopyEvent::DestinationOpened { path } => {
            tracing::info!("Destination {} is open for writing", path.display());
        }
        CopyEvent::ChunkRead { index, bytes } => {
            tracing::debug!(chunk = index, "Read {} bytes", bytes);
        }
        CopyEvent::ChunkWritten { index, bytes } => {
            tracing::debug!(chunk = index, "Wrote {} bytes", bytes);
        }
        CopyEvent::Completed { bytes, chunks } => {
            tracing::info!(chunks, "Copy completed, {} bytes", bytes);
        }
    }
}
