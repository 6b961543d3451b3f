//! Single file copy operations.
//!
//! The source is opened before the destination, so a missing or unreadable
//! source never creates or truncates the destination. Both handles are owned
//! by the call and closed on every exit path.

use crate::error::{Error, Result};
use crate::event::CopyEvent;
use crate::options::CopyOptions;
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use super::utils::{TransferError, copy_chunks, is_same_file};

/// Statistics from a completed copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Number of non-empty chunks transferred
    pub chunks: u64,
    /// Duration of the copy operation
    pub duration: Duration,
}

/// Copy `src` to `dst` with default options and return the bytes copied.
///
/// # Example
///
/// ```no_run
/// let bytes = chunkcopy::copy("input.bin", "output.bin")?;
/// println!("Copied {bytes} bytes");
/// # Ok::<(), chunkcopy::Error>(())
/// ```
///
/// # Errors
///
/// See [`copy_file`].
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64> {
    copy_file(src.as_ref(), dst.as_ref(), &CopyOptions::default()).map(|s| s.bytes_copied)
}

/// Copy the contents of one file to another in fixed-size chunks.
///
/// The destination is created if absent and truncated if present. Bytes are
/// copied verbatim; no metadata is carried over.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path
/// * `options` - Copy options
///
/// # Errors
///
/// Returns an error if:
/// - Source cannot be opened or is a directory ([`Error::SourceOpen`])
/// - Destination is the source itself ([`Error::SameFile`])
/// - Destination cannot be opened ([`Error::DestinationOpen`])
/// - A read fails mid-transfer ([`Error::Read`])
/// - A write, flush or sync fails ([`Error::Write`])
///
/// On a mid-transfer failure the destination is left holding whatever was
/// written so far.
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let start = Instant::now();

    let source_open = |source: io::Error| Error::SourceOpen {
        path: src.to_path_buf(),
        source,
    };
    let mut src_file = File::open(src).map_err(source_open)?;
    let src_meta = src_file.metadata().map_err(source_open)?;
    // Opening a directory succeeds on Unix; refuse it here instead of at the first read
    if src_meta.is_dir() {
        return Err(source_open(io::Error::from(io::ErrorKind::IsADirectory)));
    }
    options.emit(&CopyEvent::SourceOpened {
        path: src,
        len: src_meta.len(),
    });

    let destination_open = |source: io::Error| Error::DestinationOpen {
        path: dst.to_path_buf(),
        source,
    };
    if is_same_file(src, &src_meta, dst).map_err(destination_open)? {
        return Err(Error::SameFile(dst.to_path_buf()));
    }
    let mut dst_file = File::create(dst).map_err(destination_open)?;
    options.emit(&CopyEvent::DestinationOpened { path: dst });

    let mut buf = vec![0u8; options.buffer_size.max(1)];
    let transfer = copy_chunks(&mut src_file, &mut dst_file, &mut buf, |event| {
        options.emit(&event);
    })
    .map_err(|e| match e {
        TransferError::Read {
            bytes_copied,
            source,
        } => Error::Read {
            path: src.to_path_buf(),
            bytes_copied,
            source,
        },
        TransferError::Write {
            bytes_copied,
            source,
        } => Error::Write {
            path: dst.to_path_buf(),
            bytes_copied,
            source,
        },
    })?;

    if options.fsync {
        dst_file.sync_all().map_err(|source| Error::Write {
            path: dst.to_path_buf(),
            bytes_copied: transfer.bytes,
            source,
        })?;
    }

    options.emit(&CopyEvent::Completed {
        bytes: transfer.bytes,
        chunks: transfer.chunks,
    });

    Ok(CopyStats {
        bytes_copied: transfer.bytes,
        chunks: transfer.chunks,
        duration: start.elapsed(),
    })
}

// =============================================================================
// Tests
// =============================================================================
