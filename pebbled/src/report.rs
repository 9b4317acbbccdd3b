//! Blob store reports

use blob_store::BlobStore;
use serde::Serialize;

/// One blob in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobReport {
    pub name: String,
    pub size: usize,
}

/// Snapshot of a blob store, in slot order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreReport {
    pub live: usize,
    pub capacity: usize,
    pub blobs: Vec<BlobReport>,
}

impl StoreReport {
    pub fn from_store(store: &BlobStore) -> Self {
        Self {
            live: store.len(),
            capacity: store.capacity(),
            blobs: store
                .iter()
                .map(|blob| BlobReport {
                    name: blob.name().to_string(),
                    size: blob.len(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
