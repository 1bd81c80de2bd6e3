//! Error types for bindery operations.

use thiserror::Error;

/// Errors that can occur while packaging a book.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A cover was requested in a format no configured renderer can produce.
    #[error("cover renderer unavailable: {0}")]
    RenderUnavailable(String),

    /// Identifier generation failed. Reserved; unreachable with the
    /// default UUID source.
    #[error("identifier generation failed: {0}")]
    Identity(String),
}

pub type Result<T> = std::result::Result<T, Error>;
