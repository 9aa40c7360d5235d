//! Error types for toolbelt operations.
//!
//! Only structurally invalid *control* arguments produce an error (a zero
//! chunk size, inverted clamp bounds, a factorial too large to represent).
//! Invalid *domain* data never does: the date, validation, array, and text
//! functions signal it with `None`, `false`, or an empty value instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(String),

    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("Overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, UtilError>;
