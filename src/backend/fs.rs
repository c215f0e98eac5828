//! PicoDB - Filesystem Backend
//! Durable persistence: one file per key under a root directory.
//!
//! ## On-Disk Layout
//! ```text
//! <root_dir>/<key>    codec-encoded value bytes, nothing else
//! ```
//!
//! Writes truncate and rewrite the file in place. A reader racing a
//! writer, or a crash mid-write, can observe a partially written file.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::config::Options;
use crate::error::{PicoError, Result};
use crate::types::{check_key, Value};

use super::codec::Codec;
use super::Backend;

/// Directory-backed key-value backend.
///
/// When locking is enabled, the directory-ensure and file-write steps of
/// every `store` run under a mutex owned by this instance. Reads and
/// deletes are not serialized, and two instances over the same root do
/// not exclude each other.
#[derive(Debug)]
pub struct FsBackend {
    root: PathBuf,
    codec: Codec,
    file_mode: u32,
    dir_mode: u32,
    write_lock: Option<Mutex<()>>,
}

impl FsBackend {
    /// Create a backend from store options. Nothing is touched on disk.
    pub fn new(options: &Options) -> Self {
        Self {
            root: options.root_dir.clone(),
            codec: Codec::from_compression(options.compression),
            file_mode: options.file_mode,
            dir_mode: options.dir_mode,
            write_lock: options.locking.then(|| Mutex::new(())),
        }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the codec applied to stored values.
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Returns true if writes are serialized.
    pub fn is_locking(&self) -> bool {
        self.write_lock.is_some()
    }

    /// Returns the file path backing `key`, after validating the key.
    pub fn path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.root.join(key))
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.dir_mode);
        }
        builder.create(dir)
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.file_mode);
        }
        let mut file = options.open(path)?;
        file.write_all(bytes)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let _guard = self.write_lock.as_ref().map(|lock| lock.lock());
        if let Some(dir) = path.parent() {
            self.create_dir_all(dir)?;
        }
        self.write_file(path, bytes)?;
        Ok(())
    }
}

impl Backend for FsBackend {
    fn store(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path(key)?;
        let encoded = self.codec.encode(value)?;
        self.write(&path, &encoded)
    }

    fn load(&self, key: &str) -> Result<Value> {
        let path = self.path(key)?;
        let not_found = || PicoError::KeyNotFound(key.to_string());

        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => return Err(not_found()),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(e.into()),
        }

        let stored = match fs::read(&path) {
            Ok(bytes) => bytes,
            // Removed between the stat and the read.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };
        self.codec.decode(&stored)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path(key)?;

        match fs::metadata(&path) {
            // A directory never holds a value, so there is nothing to delete.
            Ok(meta) if meta.is_dir() => return Ok(()),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        }

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
