//! Error types for sevenguis-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sevenguis-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Grid wider than the supported column letters
    #[error("Grid column count {0} exceeds the A-J column range")]
    GridTooWide(u8),
}
