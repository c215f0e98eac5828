//! PicoDB - Integration Tests
//! End-to-end tests through the public API:
//! open → store → load → delete, across cache and compression settings.

use std::fs;
use std::path::Path;

use picodb::backend::{Backend, FsBackend};
use picodb::{ErrorKind, Options, PicoDb, PicoError};
use proptest::prelude::*;

mod common {
    use std::path::Path;

    /// Options pointing at a fresh directory under `dir`.
    pub fn temp_options(dir: &Path) -> picodb::Options {
        picodb::Options::new(dir.join("t1"))
    }
}

fn all_variants(dir: &Path) -> Vec<Options> {
    let base = common::temp_options(dir);
    vec![
        base.clone(),
        base.clone().with_caching(),
        base.clone().with_compression(),
        base.with_caching().with_compression().with_locking(),
    ]
}

#[test]
fn test_basic_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let db = PicoDb::open(common::temp_options(dir.path())).unwrap();

    db.store("a", &[1, 2, 3]).unwrap();
    assert_eq!(db.load("a").unwrap(), vec![1, 2, 3]);
    db.delete("a").unwrap();

    let err = db.load("a").unwrap_err();
    assert!(matches!(err, PicoError::KeyNotFound(ref k) if k == "a"));
}

#[test]
fn test_compressed_empty_value() {
    let dir = tempfile::tempdir().unwrap();
    let db = PicoDb::open(common::temp_options(dir.path()).with_compression()).unwrap();

    db.store("b", &[]).unwrap();
    assert_eq!(db.load("b").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_every_configuration() {
    let dir = tempfile::tempdir().unwrap();
    for (i, options) in all_variants(dir.path()).into_iter().enumerate() {
        let db = PicoDb::open(options.with_root_dir(dir.path().join(i.to_string()))).unwrap();

        assert!(db.load("never").unwrap_err().is_not_found());
        db.delete("never").unwrap();

        db.store("key", b"old").unwrap();
        db.store("key", b"new").unwrap();
        assert_eq!(db.load("key").unwrap(), b"new".to_vec());

        db.store("empty", b"").unwrap();
        assert_eq!(db.load("empty").unwrap(), Vec::<u8>::new());

        db.delete("key").unwrap();
        assert!(db.load("key").unwrap_err().is_not_found());
    }
}

#[test]
fn test_invalid_key_every_operation() {
    let dir = tempfile::tempdir().unwrap();
    for options in all_variants(dir.path()) {
        let db = PicoDb::open(options).unwrap();
        let key = format!("nested{}key", std::path::MAIN_SEPARATOR);

        assert_eq!(db.store(&key, b"x").unwrap_err().kind(), ErrorKind::InvalidKey);
        assert_eq!(db.load(&key).unwrap_err().kind(), ErrorKind::InvalidKey);
        assert_eq!(db.delete(&key).unwrap_err().kind(), ErrorKind::InvalidKey);
    }
    assert!(!dir.path().join("t1").exists());
}

#[test]
fn test_cached_writes_reach_disk() {
    let dir = tempfile::tempdir().unwrap();
    let options = common::temp_options(dir.path()).with_caching();
    let db = PicoDb::open(options.clone()).unwrap();

    db.store("durable", b"value").unwrap();

    let disk = FsBackend::new(&options);
    assert_eq!(disk.load("durable").unwrap(), b"value".to_vec());
}

#[test]
fn test_cold_cache_falls_back_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let options = common::temp_options(dir.path()).with_caching().with_compression();

    {
        let db = PicoDb::open(options.clone()).unwrap();
        db.store_string("persistent", "survives restart").unwrap();
        // Store is dropped here; the cache goes with it.
    }

    let db = PicoDb::open(options).unwrap();
    assert_eq!(db.load_string("persistent").unwrap(), "survives restart");
}

#[test]
fn test_cache_serves_reads_before_disk() {
    let dir = tempfile::tempdir().unwrap();
    let options = common::temp_options(dir.path()).with_caching();
    let db = PicoDb::open(options.clone()).unwrap();

    db.store("key", b"v1").unwrap();
    // Rewrite the durable layer behind the store's back.
    FsBackend::new(&options).store("key", b"v2").unwrap();

    assert_eq!(db.load("key").unwrap(), b"v1".to_vec());
}

#[test]
fn test_cached_delete_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = common::temp_options(dir.path()).with_caching();
    let db = PicoDb::open(options.clone()).unwrap();

    db.store("key", b"value").unwrap();
    db.delete("key").unwrap();

    assert!(!dir.path().join("t1").join("key").exists());
    assert!(db.load("key").unwrap_err().is_not_found());
}

#[test]
fn test_disk_only_key_deleted_through_cache() {
    let dir = tempfile::tempdir().unwrap();
    let options = common::temp_options(dir.path()).with_caching();
    FsBackend::new(&options).store("cold", b"value").unwrap();

    let db = PicoDb::open(options).unwrap();
    db.delete("cold").unwrap();
    assert!(db.load("cold").unwrap_err().is_not_found());
}

#[test]
fn test_switching_codec_misreads() {
    let dir = tempfile::tempdir().unwrap();
    let plain = common::temp_options(dir.path());

    PicoDb::open(plain.clone()).unwrap().store("key", b"raw bytes").unwrap();

    let gz = PicoDb::open(plain.with_compression()).unwrap();
    assert_eq!(gz.load("key").unwrap_err().kind(), ErrorKind::Io);
}

#[test]
fn test_large_values() {
    let dir = tempfile::tempdir().unwrap();
    let db = PicoDb::open(common::temp_options(dir.path()).with_compression()).unwrap();

    let large_value = vec![0xABu8; 1_000_000];
    db.store("big", &large_value).unwrap();
    assert_eq!(db.load("big").unwrap(), large_value);

    let on_disk = fs::metadata(dir.path().join("t1").join("big")).unwrap().len();
    assert!(on_disk < 100_000);
}

#[test]
fn test_unicode_keys() {
    let dir = tempfile::tempdir().unwrap();
    let db = PicoDb::open(common::temp_options(dir.path())).unwrap();

    db.store("café", b"coffee").unwrap();
    db.store("日本語", b"japanese").unwrap();
    db.store("🦀", b"crab").unwrap();

    assert_eq!(db.load("café").unwrap(), b"coffee".to_vec());
    assert_eq!(db.load("日本語").unwrap(), b"japanese".to_vec());
    assert_eq!(db.load("🦀").unwrap(), b"crab".to_vec());
}

#[test]
fn test_many_keys() {
    let dir = tempfile::tempdir().unwrap();
    let db = PicoDb::open(common::temp_options(dir.path()).with_caching()).unwrap();

    for i in 0..100 {
        db.store_string(&format!("key_{:04}", i), &format!("value_{:04}", i)).unwrap();
    }

    assert_eq!(db.load_string("key_0000").unwrap(), "value_0000");
    assert_eq!(db.load_string("key_0050").unwrap(), "value_0050");
    assert_eq!(db.load_string("key_0099").unwrap(), "value_0099");
    assert_eq!(fs::read_dir(dir.path().join("t1")).unwrap().count(), 100);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_store_then_load(
        key in "[a-zA-Z0-9_.-]{1,32}",
        value in proptest::collection::vec(any::<u8>(), 0..2048),
        caching in any::<bool>(),
        compression in any::<bool>(),
    ) {
        prop_assume!(key != "." && key != "..");
        let dir = tempfile::tempdir().unwrap();
        let mut options = common::temp_options(dir.path());
        if caching {
            options = options.with_caching();
        }
        if compression {
            options = options.with_compression();
        }
        let db = PicoDb::open(options).unwrap();

        db.store(&key, &value).unwrap();
        prop_assert_eq!(db.load(&key).unwrap(), value);
    }
}
