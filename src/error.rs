//! PicoDB - Custom Error Types
//! Defines the error taxonomy shared by every backend.

use thiserror::Error;

/// Custom Result type for PicoDB.
pub type Result<T> = std::result::Result<T, PicoError>;

/// Coarse error classification.
///
/// Composite backends branch on this discriminator rather than on
/// the error value itself: only `KeyNotFound` is recoverable by
/// falling through to the next layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The key has no value in the queried backend.
    KeyNotFound,
    /// The key violates the structural constraint on keys.
    InvalidKey,
    /// Any storage, filesystem or decoding failure.
    Io,
}

/// Error types for PicoDB.
#[derive(Error, Debug)]
pub enum PicoError {
    /// No value is stored under the key.
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// The key is empty, names `.`/`..`, or contains a path separator.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// I/O errors from file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes could not be decoded by the configured codec.
    #[error("Data corruption detected: {0}")]
    Corruption(String),

    /// A value loaded as text was not valid UTF-8.
    #[error("Value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl PicoError {
    /// Returns the discriminator for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PicoError::KeyNotFound(_) => ErrorKind::KeyNotFound,
            PicoError::InvalidKey(_) => ErrorKind::InvalidKey,
            PicoError::Io(_) | PicoError::Corruption(_) | PicoError::Utf8(_) => ErrorKind::Io,
        }
    }

    /// Returns the key carried by the error, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            PicoError::KeyNotFound(key) | PicoError::InvalidKey(key) => Some(key.as_str()),
            _ => None,
        }
    }

    /// Shorthand for `kind() == ErrorKind::KeyNotFound`.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::KeyNotFound
    }
}
