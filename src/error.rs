//! Error types for chunkcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during a copy, the [`ErrorKind`] taxonomy they map onto,
//! and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Kind | Errors |
//! |------|--------|
//! | [`ErrorKind::SourceOpenFailed`] | [`Error::SourceOpen`] |
//! | [`ErrorKind::DestOpenFailed`] | [`Error::DestinationOpen`], [`Error::SameFile`] |
//! | [`ErrorKind::ReadFailed`] | [`Error::Read`] |
//! | [`ErrorKind::WriteFailed`] | [`Error::Write`] |
//!
//! [`ErrorKind::MissingArguments`] is never produced by the library; it exists
//! so command-line front ends can report argument errors with the same codes.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for chunkcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a copy failure.
///
/// Every [`Error`] maps to exactly one kind via [`Error::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Fewer than two paths were supplied.
    MissingArguments,
    /// The source could not be opened for reading.
    SourceOpenFailed,
    /// The destination could not be opened for writing.
    DestOpenFailed,
    /// Reading from the source failed mid-transfer.
    ReadFailed,
    /// Writing to the destination failed mid-transfer.
    WriteFailed,
}

impl ErrorKind {
    /// Stable snake_case identifier, suitable for machine-readable output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingArguments => "missing_arguments",
            Self::SourceOpenFailed => "source_open_failed",
            Self::DestOpenFailed => "dest_open_failed",
            Self::ReadFailed => "read_failed",
            Self::WriteFailed => "write_failed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during copy operations.
///
/// All errors include the path involved. Except for [`Error::SameFile`], the
/// underlying [`io::Error`] is available through [`std::error::Error::source`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Source does not exist, is unreadable, or is a directory
    #[error("Failed to open source {path}: {source}")]
    SourceOpen {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Destination could not be created or truncated
    #[error("Failed to open destination {path}: {source}")]
    DestinationOpen {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source and destination refer to the same file
    ///
    /// Truncating the destination would destroy the source, so the copy is
    /// refused before the destination is opened. This is the only variant
    /// without an underlying [`io::Error`].
    #[error("Source and destination are the same file: {0}")]
    SameFile(PathBuf),

    /// Reading from the source failed
    #[error("Failed to read from {path} after {bytes_copied} bytes: {source}")]
    Read {
        /// Source path
        path: PathBuf,
        /// Bytes successfully copied before the failure
        bytes_copied: u64,
        /// Underlying error
        source: io::Error,
    },

    /// Writing to the destination failed
    #[error("Failed to write to {path} after {bytes_copied} bytes: {source}")]
    Write {
        /// Destination path
        path: PathBuf,
        /// Bytes successfully copied before the failure
        bytes_copied: u64,
        /// Underlying error
        source: io::Error,
    },
}

impl Error {
    /// The [`ErrorKind`] this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceOpen { .. } => ErrorKind::SourceOpenFailed,
            Self::DestinationOpen { .. } | Self::SameFile(_) => ErrorKind::DestOpenFailed,
            Self::Read { .. } => ErrorKind::ReadFailed,
            Self::Write { .. } => ErrorKind::WriteFailed,
        }
    }

    /// Check if this error was caused by the destination running out of space.
    #[must_use]
    pub fn is_no_space(&self) -> bool {
        match self {
            Self::Write { source, .. } | Self::DestinationOpen { source, .. } => {
                is_no_space_error(source)
            }
            _ => false,
        }
    }
}

/// Check if an IO error indicates "no space left on device".
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        const ENOSPC: i32 = 28;
        if let Some(raw_error) = error.raw_os_error() {
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        const ERROR_DISK_FULL: i32 = 112;
        if let Some(raw_error) = error.raw_os_error() {
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}
