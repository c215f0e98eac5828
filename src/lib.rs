//! PicoDB - Directory-Backed Key-Value Store
//!
//! Persists opaque byte values under string keys, one file per key,
//! below a single root directory.
//!
//! ## Features
//! - **Filesystem backend**: One file per key, created with configurable permissions
//! - **Compression**: Optional gzip encoding of values at rest
//! - **Cache**: Optional concurrent in-memory layer in front of the disk
//! - **Chain**: Composable backends with fan-out writes and fallback reads
//! - **Locking**: Optional write serialization per store instance
//! - **Metrics**: Lock-free atomic counters for observability
//!
//! ## Example
//! ```no_run
//! use picodb::{config::Options, db::PicoDb};
//!
//! let options = Options::defaults().with_root_dir("/tmp/picodb").with_caching();
//! let db = PicoDb::open(options).unwrap();
//!
//! db.store("key", b"value").unwrap();
//! assert_eq!(db.load("key").unwrap(), b"value".to_vec());
//! ```

pub mod backend;
pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod types;

pub use config::Options;
pub use db::PicoDb;
pub use error::{ErrorKind, PicoError, Result};
