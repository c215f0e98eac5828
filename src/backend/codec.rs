//! PicoDB - Storage Codec
//! Reversible transform applied to values on their way to and from disk.

use std::io::{Read, Write};

use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{PicoError, Result};
use crate::types::Value;

/// Value encoding used by the filesystem backend.
///
/// The codec is fixed when a store is opened. Files written with one
/// codec are not readable with the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codec {
    /// Bytes are stored as given.
    #[default]
    Identity,
    /// Bytes are gzip-compressed at the default level.
    Gzip,
}

impl Codec {
    /// Pick the codec matching the `compression` switch.
    pub fn from_compression(enabled: bool) -> Self {
        if enabled {
            Codec::Gzip
        } else {
            Codec::Identity
        }
    }

    /// Transform raw value bytes into the bytes to persist.
    pub fn encode(&self, value: &[u8]) -> Result<Value> {
        match self {
            Codec::Identity => Ok(value.to_vec()),
            Codec::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(value)?;
                Ok(encoder.finish()?)
            }
        }
    }

    /// Reverse [`encode`](Self::encode).
    ///
    /// Input that was not produced by a matching encode, including a valid
    /// gzip member followed by stray bytes, is reported as
    /// [`PicoError::Corruption`].
    pub fn decode(&self, stored: &[u8]) -> Result<Value> {
        match self {
            Codec::Identity => Ok(stored.to_vec()),
            Codec::Gzip => {
                let mut rest = stored;
                let mut value = Vec::new();
                GzDecoder::new(&mut rest)
                    .read_to_end(&mut value)
                    .map_err(|e| PicoError::Corruption(e.to_string()))?;
                if !rest.is_empty() {
                    return Err(PicoError::Corruption(format!(
                        "{} trailing bytes after gzip stream",
                        rest.len()
                    )));
                }
                Ok(value)
            }
        }
    }
}
