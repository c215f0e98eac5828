//! PicoDB - Backend Chain
//! A composite backend over an ordered list of backends.
//!
//! ## Semantics
//! - **store**: every member, in order; the first error aborts (no rollback)
//! - **load**: members in order; misses fall through, the first hit wins
//! - **delete**: every member, in order; misses are skipped, other errors abort
//!
//! An empty chain behaves as an always-empty store.

use crate::error::{PicoError, Result};
use crate::types::Value;

use super::Backend;

/// Ordered stack of backends presented as a single backend.
#[derive(Default)]
pub struct Chain {
    members: Vec<Box<dyn Backend>>,
}

impl Chain {
    /// Create a chain over `members`. Index 0 has the highest read priority.
    pub fn new(members: Vec<Box<dyn Backend>>) -> Self {
        Self { members }
    }

    /// Append a backend with the lowest read priority.
    pub fn push(&mut self, backend: impl Backend + 'static) {
        self.members.push(Box::new(backend));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, backend: impl Backend + 'static) -> Self {
        self.push(backend);
        self
    }

    /// Returns the number of member backends.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the chain has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("members", &self.members.len())
            .finish()
    }
}

impl Backend for Chain {
    fn store(&self, key: &str, value: &[u8]) -> Result<()> {
        for member in &self.members {
            member.store(key, value)?;
        }
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Value> {
        for member in &self.members {
            match member.load(key) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            }
        }
        Err(PicoError::KeyNotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        for member in &self.members {
            match member.delete(key) {
                Ok(()) => {}
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
