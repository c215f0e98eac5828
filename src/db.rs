//! PicoDB - Store Facade
//! Assembles the backend graph from [`Options`] and exposes the public API.

use std::sync::Arc;

use crate::backend::{Backend, Cache, Chain, FsBackend};
use crate::config::Options;
use crate::error::{PicoError, Result};
use crate::metrics::StoreMetrics;
use crate::types::{check_key, Value};

/// A directory-backed key-value store.
///
/// Without caching the store talks to the filesystem backend directly.
/// With caching it sits on a [`Chain`] of `[Cache, FsBackend]`: reads try
/// memory first and fall back to disk, writes always reach both.
///
/// Keys are validated before the backend graph is entered, so a rejected
/// key never reaches the cache.
///
/// All operations take `&self`; share a store between threads with `Arc`.
pub struct PicoDb {
    backend: Box<dyn Backend>,
    cache: Option<Arc<Cache>>,
    options: Options,
    metrics: StoreMetrics,
}

impl PicoDb {
    /// Open a store. The root directory is created lazily on first write.
    pub fn open(options: Options) -> Result<Self> {
        let fs = FsBackend::new(&options);
        let cache = options.caching.then(|| Arc::new(Cache::new()));
        let backend: Box<dyn Backend> = match &cache {
            Some(cache) => Box::new(Chain::default().with(Arc::clone(cache)).with(fs)),
            None => Box::new(fs),
        };

        log::info!(
            "PicoDB opened at {:?} (caching: {}, compression: {}, locking: {})",
            options.root_dir,
            options.caching,
            options.compression,
            options.locking
        );

        Ok(Self {
            backend,
            cache,
            options,
            metrics: StoreMetrics::new(),
        })
    }

    /// Store `value` under `key`, overwriting any existing value.
    pub fn store(&self, key: &str, value: &[u8]) -> Result<()> {
        log::trace!("store {:?} ({} bytes)", key, value.len());
        match check_key(key).and_then(|()| self.backend.store(key, value)) {
            Ok(()) => {
                self.metrics.record_store(value.len());
                Ok(())
            }
            Err(e) => Err(self.failed("store", key, e)),
        }
    }

    /// Load the value stored under `key`.
    ///
    /// Returns [`PicoError::KeyNotFound`](crate::error::PicoError::KeyNotFound)
    /// if nothing is stored.
    pub fn load(&self, key: &str) -> Result<Value> {
        match check_key(key).and_then(|()| self.backend.load(key)) {
            Ok(value) => {
                log::trace!("load {:?} ({} bytes)", key, value.len());
                self.metrics.record_load(value.len());
                Ok(value)
            }
            Err(e) if e.is_not_found() => {
                log::debug!("load {:?}: not found", key);
                self.metrics.record_miss();
                Err(e)
            }
            Err(e) => Err(self.failed("load", key, e)),
        }
    }

    /// Delete `key`. Deleting an absent key succeeds.
    pub fn delete(&self, key: &str) -> Result<()> {
        log::trace!("delete {:?}", key);
        match check_key(key).and_then(|()| self.backend.delete(key)) {
            Ok(()) => {
                self.metrics.record_delete();
                Ok(())
            }
            Err(e) => Err(self.failed("delete", key, e)),
        }
    }

    /// Store a UTF-8 string.
    pub fn store_string(&self, key: &str, value: &str) -> Result<()> {
        self.store(key, value.as_bytes())
    }

    /// Load a value and decode it as UTF-8.
    pub fn load_string(&self, key: &str) -> Result<String> {
        let bytes = self.load(key)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Returns the options this store was opened with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the number of cached entries, or `None` without caching.
    pub fn cached_len(&self) -> Option<usize> {
        self.cache.as_ref().map(|cache| cache.len())
    }

    /// Returns the store's operation counters.
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    fn failed(&self, op: &str, key: &str, err: PicoError) -> PicoError {
        log::warn!("{} {:?} failed: {}", op, key, err);
        self.metrics.record_failure();
        err
    }
}

impl std::fmt::Debug for PicoDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PicoDb")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
