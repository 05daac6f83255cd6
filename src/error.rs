use std::io;

use thiserror::Error;

/// Errors surfaced by the reader/writer entry points.
///
/// The formatting pass itself is total and cannot fail; only the
/// surrounding I/O can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write formatted output: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
