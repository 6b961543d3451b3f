//! # chunkcopy
//!
//! Simple, checked, chunked file-to-file copying for Rust.
//!
//! ## Core Features
//!
//! - **Checked opens**: A missing or unreadable source is reported before the
//!   destination is created or truncated
//! - **Chunked transfer**: Bytes move through a fixed-size buffer (1024 bytes
//!   by default), one full chunk at a time
//! - **Exact end of stream**: The terminal empty read is never written
//! - **Same-file guard**: Copying a file onto itself is refused instead of
//!   truncating the source
//! - **Scoped handles**: Both files are closed on every exit path
//! - **Typed errors**: Every failure maps onto a small [`ErrorKind`] taxonomy
//!
//! ## Quick Start
//!
//! ```no_run
//! let bytes = chunkcopy::copy("input.bin", "output.bin")?;
//! println!("Copied {bytes} bytes");
//! # Ok::<(), chunkcopy::Error>(())
//! ```
//!
//! ## Builder API
//!
//! ```no_run
//! use chunkcopy::CopyBuilder;
//!
//! let stats = CopyBuilder::new("input.bin", "output.bin")
//!     .buffer_size(64 * 1024)
//!     .fsync()
//!     .run()?;
//! println!("Copied {} bytes in {} chunks", stats.bytes_copied, stats.chunks);
//! # Ok::<(), chunkcopy::Error>(())
//! ```
//!
//! ## Function API
//!
//! ```no_run
//! use chunkcopy::{CopyOptions, copy_file};
//! use std::path::Path;
//!
//! let options = CopyOptions::default().with_buffer_size(4096);
//! let stats = copy_file(Path::new("input.bin"), Path::new("output.bin"), &options)?;
//! # Ok::<(), chunkcopy::Error>(())
//! ```
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Log copy events with the tracing crate |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod copy;
mod error;
mod event;
mod options;

pub use builder::CopyBuilder;
pub use copy::{CopyStats, copy, copy_file};
pub use error::{Error, ErrorKind, Result, is_no_space_error};
pub use event::{CopyEvent, EventHandler};
pub use options::{CopyOptions, DEFAULT_BUFFER_SIZE};
