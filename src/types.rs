//! PicoDB - Core Type Definitions
//! Defines the value type and the structural rules for keys.

use std::path::is_separator;

use crate::error::{PicoError, Result};

/// Value type for the store.
/// An empty vector is a legal value, distinct from an absent key.
pub type Value = Vec<u8>;

/// Validate a key before it is turned into a file name.
///
/// A key must be a single, non-empty path segment: no separator
/// characters, and not one of the special names `.` or `..`.
pub fn check_key(key: &str) -> Result<()> {
    if key.is_empty() || key == "." || key == ".." || key.chars().any(is_separator) {
        return Err(PicoError::InvalidKey(key.to_string()));
    }
    Ok(())
}
