//! Fixed-capacity named blob store
//!
//! The shell's only persistent-looking state: up to [`MAX_BLOBS`] named byte
//! payloads held in a static slot array. Slots are filled lowest-index first
//! and never freed, so listing order is creation order.
//!
//! ## Invariants
//!
//! - The live count equals the number of occupied slots
//! - At most one occupied slot holds a given name (exact, case-sensitive)
//! - An occupied slot is never overwritten

#![cfg_attr(not(test), no_std)]

use heapless::{String, Vec};
use thiserror::Error;

/// Number of blob slots
pub const MAX_BLOBS: usize = 16;

/// Name length limit; valid names are strictly shorter
pub const MAX_NAME_LEN: usize = 12;

/// Maximum content length in bytes
pub const MAX_BLOB_LEN: usize = 1024;

/// Storage capacity for a name
pub const NAME_CAP: usize = MAX_NAME_LEN - 1;

/// Reasons `BlobStore::create` can refuse a blob
///
/// Checks run in declaration order; the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("blob store is full ({} blobs)", MAX_BLOBS)]
    CapacityExceeded,

    #[error("blob name must not be empty")]
    EmptyName,

    #[error("blob name too long: {len} bytes (max {})", NAME_CAP)]
    NameTooLong { len: usize },

    #[error("blob already exists")]
    DuplicateName,

    #[error("blob content too long: {len} bytes (max {})", MAX_BLOB_LEN)]
    ContentTooLong { len: usize },
}

/// One named payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    name: String<NAME_CAP>,
    content: Vec<u8, MAX_BLOB_LEN>,
}

impl Blob {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Slot array plus live count
#[derive(Debug, Clone)]
pub struct BlobStore {
    slots: [Option<Blob>; MAX_BLOBS],
    live: usize,
}

impl BlobStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            live: 0,
        }
    }

    /// Stores `content` under `name` in the first free slot
    pub fn create(&mut self, name: &str, content: &[u8]) -> Result<(), CreateError> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(CreateError::CapacityExceeded)?;

        if name.is_empty() {
            return Err(CreateError::EmptyName);
        }
        if name.len() >= MAX_NAME_LEN {
            return Err(CreateError::NameTooLong { len: name.len() });
        }
        if self.lookup(name).is_some() {
            return Err(CreateError::DuplicateName);
        }

        let mut stored_name = String::new();
        stored_name
            .push_str(name)
            .map_err(|_| CreateError::NameTooLong { len: name.len() })?;
        let stored_content = Vec::from_slice(content)
            .map_err(|_| CreateError::ContentTooLong { len: content.len() })?;

        self.slots[slot] = Some(Blob {
            name: stored_name,
            content: stored_content,
        });
        self.live += 1;
        debug_assert_eq!(self.live, self.iter().count());

        tracing::info!(name, slot, size = content.len(), "blob created");
        Ok(())
    }

    /// Finds a blob by exact name
    pub fn lookup(&self, name: &str) -> Option<&Blob> {
        self.iter().find(|blob| blob.name() == name)
    }

    /// Names of all live blobs in slot order
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.iter().map(Blob::name)
    }

    /// Live blobs in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Blob> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn capacity(&self) -> usize {
        MAX_BLOBS
    }

    pub fn is_full(&self) -> bool {
        self.live == MAX_BLOBS
    }
}

impl Default for BlobStore {
    fn default() -> Self {
        Self::new()
    }
}
