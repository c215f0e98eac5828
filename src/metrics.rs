//! PicoDB - Store Metrics
//! Lock-free operation counters kept by the store facade.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Atomic operation counters for a PicoDB store.
///
/// All counters use `Ordering::Relaxed`: they are for observation only
/// and never synchronize anything.
#[derive(Debug)]
pub struct StoreMetrics {
    /// Successful `store` operations.
    pub stores: AtomicU64,
    /// `load` operations that returned a value.
    pub loads: AtomicU64,
    /// `load` operations that found no value.
    pub misses: AtomicU64,
    /// Successful `delete` operations.
    pub deletes: AtomicU64,
    /// Operations that failed for any reason other than a miss.
    pub failures: AtomicU64,
    /// Value bytes handed to `store`.
    pub bytes_written: AtomicU64,
    /// Value bytes returned by `load`.
    pub bytes_read: AtomicU64,
    opened_at: Instant,
}

impl StoreMetrics {
    /// Create a new metrics instance with all counters at zero.
    pub fn new() -> Self {
        Self {
            stores: AtomicU64::new(0),
            loads: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            deletes: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            bytes_read: AtomicU64::new(0),
            opened_at: Instant::now(),
        }
    }

    /// Record a successful store of `value_size` bytes.
    pub fn record_store(&self, value_size: usize) {
        self.stores.fetch_add(1, Ordering::Relaxed);
        self.bytes_written
            .fetch_add(value_size as u64, Ordering::Relaxed);
    }

    /// Record a load that returned `value_size` bytes.
    pub fn record_load(&self, value_size: usize) {
        self.loads.fetch_add(1, Ordering::Relaxed);
        self.bytes_read.fetch_add(value_size as u64, Ordering::Relaxed);
    }

    /// Record a load that found no value.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful delete.
    pub fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an operation that failed with anything but a miss.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Seconds since the store was opened.
    pub fn uptime_secs(&self) -> f64 {
        self.opened_at.elapsed().as_secs_f64()
    }

    /// Total operations attempted, failed ones included.
    pub fn total_ops(&self) -> u64 {
        self.stores.load(Ordering::Relaxed)
            + self.loads.load(Ordering::Relaxed)
            + self.misses.load(Ordering::Relaxed)
            + self.deletes.load(Ordering::Relaxed)
            + self.failures.load(Ordering::Relaxed)
    }

    /// Fraction of loads that found a value, or 0 if nothing was loaded.
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.loads.load(Ordering::Relaxed);
        let lookups = hits + self.misses.load(Ordering::Relaxed);
        if lookups == 0 {
            return 0.0;
        }
        hits as f64 / lookups as f64
    }

    /// Format metrics as a human-readable report.
    pub fn report(&self) -> String {
        format!(
            "\n═══ PicoDB Metrics ═══\n\
             Operations:\n\
               stores:    {}\n\
               loads:     {}\n\
               misses:    {}\n\
               deletes:   {}\n\
               failures:  {}\n\
               hit ratio: {:.2}\n\
             I/O:\n\
               written:   {} bytes\n\
               read:      {} bytes\n\
             Uptime: {:.2}s",
            self.stores.load(Ordering::Relaxed),
            self.loads.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.deletes.load(Ordering::Relaxed),
            self.failures.load(Ordering::Relaxed),
            self.hit_ratio(),
            self.bytes_written.load(Ordering::Relaxed),
            self.bytes_read.load(Ordering::Relaxed),
            self.uptime_secs(),
        )
    }
}

impl Default for StoreMetrics {
    fn default() -> Self {
        Self::new()
    }
}
