//! Error types for the spatial radius filter.

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Library error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed center coordinates or a negative radius. Returned
    /// synchronously, never retried; the caller maps it to a
    /// client-facing bad-request response.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Record id lookup found nothing
    #[error("not found: {0}")]
    NotFound(String),

    /// Store-state entrypoint called before the store was initialized
    #[error("point store not initialized")]
    StoreNotInitialized,

    /// The write-once store was initialized a second time
    #[error("point store already initialized")]
    StoreAlreadyInitialized,
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }
}
