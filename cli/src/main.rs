//! ccp - Chunked Copy
//!
//! Copies one file to another in fixed-size chunks, powered by chunkcopy.

use chunkcopy::{CopyBuilder, CopyStats, Error as CopyError, ErrorKind};
use clap::{CommandFactory, Parser};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

/// ccp - Copy a file chunk by chunk
///
/// Reads SOURCE in 1024-byte chunks and writes each chunk to DEST,
/// creating DEST or truncating it if it already exists.
#[derive(Parser, Debug)]
#[command(name = "ccp", version, about, long_about = None)]
struct Args {
    /// File to copy from
    source: Option<PathBuf>,

    /// File to create or overwrite
    dest: Option<PathBuf>,

    /// Only report the result, without per-chunk progress
    #[arg(short = 'q', long)]
    quiet: bool,
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("You need to specify source and destination as arguments")]
    MissingArguments,

    #[error(transparent)]
    Copy(#[from] CopyError),
}

impl CliError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArguments => ErrorKind::MissingArguments,
            Self::Copy(source) => source.kind(),
        }
    }

    fn is_no_space(&self) -> bool {
        matches!(self, Self::Copy(source) if source.is_no_space())
    }
}

fn main() {
    if let Err(error) = run() {
        if matches!(error, CliError::MissingArguments) {
            println!("{error}");
            println!("{}", Args::command().render_usage());
        } else {
            println!("error[{}]: {}", error.kind(), error);
            if error.is_no_space() {
                println!("No space left on the destination device; the destination is incomplete.");
            }
        }
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    let (Some(source), Some(dest)) = (args.source, args.dest) else {
        return Err(CliError::MissingArguments);
    };

    init_logging(args.quiet);

    println!("Copying {} to {}", source.display(), dest.display());
    let stats = CopyBuilder::new(&source, &dest).run()?;
    print_stats(&stats);

    Ok(())
}

fn init_logging(quiet: bool) {
    let level = if quiet { Level::WARN } else { Level::DEBUG };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn print_stats(stats: &CopyStats) {
    let chunks = if stats.chunks == 1 { "chunk" } else { "chunks" };
    println!(
        "Successfully copied {} bytes ({}) in {} {} ({:?})",
        stats.bytes_copied,
        format_bytes(stats.bytes_copied),
        stats.chunks,
        chunks,
        stats.duration
    );
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
