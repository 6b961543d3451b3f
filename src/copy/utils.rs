//! Utility functions for file copy operations.
//!
//! This module contains the chunked transfer loop used by
//! [`copy_file`](super::copy_file) and the same-file detection that guards
//! the destination truncation.

use crate::event::CopyEvent;
use std::fs::{self, Metadata};
use std::io::{self, Read, Write};
use std::path::Path;

// =============================================================================
// Chunked transfer
// =============================================================================

/// Totals of a finished chunked transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Transfer {
    pub bytes: u64,
    pub chunks: u64,
}

/// Failure of a chunked transfer, tagged with the side that failed.
#[derive(Debug)]
pub(crate) enum TransferError {
    Read { bytes_copied: u64, source: io::Error },
    Write { bytes_copied: u64, source: io::Error },
}

/// Fill `buf` from `reader`.
///
/// Returns fewer than `buf.len()` bytes only at end of stream, and 0 only when
/// the stream was already exhausted. Interrupted reads are re-issued.
pub(crate) fn read_chunk<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Stream `reader` into `writer` through `buf`, one chunk at a time.
///
/// The terminal zero-length read is never written. `on_event` sees a
/// [`CopyEvent::ChunkRead`] and a [`CopyEvent::ChunkWritten`] per chunk.
pub(crate) fn copy_chunks<R, W, F>(
    reader: &mut R,
    writer: &mut W,
    buf: &mut [u8],
    mut on_event: F,
) -> Result<Transfer, TransferError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
    F: FnMut(CopyEvent<'static>),
{
    let mut transfer = Transfer::default();

    loop {
        let n = read_chunk(reader, buf).map_err(|source| TransferError::Read {
            bytes_copied: transfer.bytes,
            source,
        })?;
        if n == 0 {
            break;
        }
        let index = transfer.chunks;
        on_event(CopyEvent::ChunkRead { index, bytes: n });

        writer
            .write_all(&buf[..n])
            .map_err(|source| TransferError::Write {
                bytes_copied: transfer.bytes,
                source,
            })?;
        on_event(CopyEvent::ChunkWritten { index, bytes: n });

        transfer.bytes += n as u64;
        transfer.chunks += 1;

        if n < buf.len() {
            // Short chunk means the source is exhausted
            break;
        }
    }

    writer.flush().map_err(|source| TransferError::Write {
        bytes_copied: transfer.bytes,
        source,
    })?;

    Ok(transfer)
}

// =============================================================================
// Same-file detection
// =============================================================================

/// Check whether `dst` already names the file described by `src_meta`.
///
/// On Unix this compares (dev, ino), so hard links and symlinks to the source
/// are caught too. A missing destination is never the same file.
#[cfg(unix)]
pub(crate) fn is_same_file(_src: &Path, src_meta: &Metadata, dst: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;
    match fs::metadata(dst) {
        Ok(dst_meta) => Ok(dst_meta.dev() == src_meta.dev() && dst_meta.ino() == src_meta.ino()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(not(unix))]
pub(crate) fn is_same_file(src: &Path, _src_meta: &Metadata, dst: &Path) -> io::Result<bool> {
    // Fallback: compare canonical paths (misses hard links)
    match fs::canonicalize(dst) {
        Ok(dst_canonical) => Ok(fs::canonicalize(src)? == dst_canonical),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

// =============================================================================
// Tests
// =============================================================================
