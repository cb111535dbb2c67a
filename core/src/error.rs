use std::io;

use thiserror::Error;

pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// The typed error taxonomy for the rainbow table engine.
///
/// Every failure kind is a distinct variant: no condition is collapsed into
/// a generic string, and none of them are retried internally.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("unsupported algorithm {0:?}: only sha1 and md5 are supported")]
    UnsupportedAlgorithm(String),

    #[error("unknown charset {0:?}")]
    UnknownCharset(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),

    #[error("invalid table file: {0}")]
    InvalidTableFile(String),

    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("generation cancelled")]
    Cancelled,
}
