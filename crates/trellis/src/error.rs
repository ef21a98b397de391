//! Error types.

use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Result type for trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors surfaced by trellis. None of these are fatal to the widget tree:
/// each reports an operation that declined to do its work.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// Every slot in the layout is occupied.
    #[error("no free slot")]
    NoFreeSlot,
    /// A geometry computation failed.
    #[error("geometry: {0}")]
    Geometry(String),
    /// Configuration could not be read or parsed.
    #[error("config: {0}")]
    Config(String),
    /// The logging subscriber could not be installed.
    #[error("logging: {0}")]
    Logging(String),
    /// An I/O operation failed.
    #[error("io: {0}")]
    Io(String),
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Self::Geometry(e.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
