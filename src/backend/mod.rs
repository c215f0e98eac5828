//! PicoDB - Storage Backends
//! The uniform store/load/delete capability and its implementations.
//!
//! Backends stack: a [`Chain`] is itself a backend, so a cache can sit in
//! front of the filesystem, and chains can nest.

pub mod cache;
pub mod chain;
pub mod codec;
pub mod fs;

use std::sync::Arc;

use crate::error::Result;
use crate::types::Value;

pub use self::cache::Cache;
pub use self::chain::Chain;
pub use self::codec::Codec;
pub use self::fs::FsBackend;

/// A key-value backend.
///
/// Implementations must report an absent key as
/// [`PicoError::KeyNotFound`](crate::error::PicoError::KeyNotFound) from
/// `load`, and may report it from `delete`; composite backends rely on
/// that to fall through to the next layer.
pub trait Backend: Send + Sync {
    /// Store `value` under `key`, overwriting any previous value.
    fn store(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Load the value stored under `key`.
    fn load(&self, key: &str) -> Result<Value>;

    /// Remove `key`.
    fn delete(&self, key: &str) -> Result<()>;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn store(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).store(key, value)
    }

    fn load(&self, key: &str) -> Result<Value> {
        (**self).load(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn store(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).store(key, value)
    }

    fn load(&self, key: &str) -> Result<Value> {
        (**self).load(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}
