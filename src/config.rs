//! PicoDB - Store Configuration
//! Options consumed once when a store is opened.

use std::path::PathBuf;

/// Default mode for value files.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Default mode for directories created under the root.
pub const DEFAULT_DIR_MODE: u32 = 0o744;

/// Configuration for a PicoDB store.
///
/// Every `with_*` method consumes the value and returns a new one, so a
/// base configuration can be cloned into several stores without any of
/// them observing the others' tweaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory holding one file per key.
    pub root_dir: PathBuf,

    /// Gzip values at rest.
    pub compression: bool,

    /// Keep an in-memory copy of every value in front of the disk.
    pub caching: bool,

    /// Serialize writes issued through the same store.
    pub locking: bool,

    /// Permission bits for created files (Unix only, subject to umask).
    pub file_mode: u32,

    /// Permission bits for created directories (Unix only, subject to umask).
    pub dir_mode: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("./picodb"),
            compression: false,
            caching: false,
            locking: false,
            file_mode: DEFAULT_FILE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

impl Options {
    /// Sensible defaults: `./picodb`, every switch off.
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Create options rooted at a custom directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Default::default()
        }
    }

    /// Set the root directory.
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Enable the in-memory cache.
    pub fn with_caching(mut self) -> Self {
        self.caching = true;
        self
    }

    /// Enable compression at rest.
    pub fn with_compression(mut self) -> Self {
        self.compression = true;
        self
    }

    /// Enable write locking.
    pub fn with_locking(mut self) -> Self {
        self.locking = true;
        self
    }

    /// Set the permission bits for created files.
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    /// Set the permission bits for created directories.
    pub fn with_dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opt = Options::defaults();
        assert_eq!(opt.root_dir, PathBuf::from("./picodb"));
        assert!(!opt.compression);
        assert!(!opt.caching);
        assert!(!opt.locking);
        assert_eq!(opt.file_mode, 0o644);
        assert_eq!(opt.dir_mode, 0o744);
    }

    #[test]
    fn test_builder_chain() {
        let opt = Options::defaults()
            .with_root_dir("/tmp/pico")
            .with_caching()
            .with_compression()
            .with_locking()
            .with_file_mode(0o600)
            .with_dir_mode(0o700);

        assert_eq!(opt.root_dir, PathBuf::from("/tmp/pico"));
        assert!(opt.caching && opt.compression && opt.locking);
        assert_eq!(opt.file_mode, 0o600);
        assert_eq!(opt.dir_mode, 0o700);
    }

    #[test]
    fn test_builder_does_not_alias() {
        let base = Options::new("/tmp/shared");
        let cached = base.clone().with_caching();

        assert!(!base.caching);
        assert!(cached.caching);
        assert_eq!(base.root_dir, cached.root_dir);
    }
}
