//! Document storage, keyed by content hash.
//!
//! The store is behind a trait so a persistent backend can replace the
//! in-memory map without touching the handlers. Re-uploading identical bytes
//! produces the same key, so writes are last-write-wins by construction.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluation::Evaluation;
use crate::fairness::{FairnessResult, PublicStatus};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// Everything persisted for one evaluated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Hex SHA-256 of the uploaded bytes. The primary key.
    pub hash: String,
    pub file_name: String,
    pub file_size: usize,
    pub uploaded_at: DateTime<Utc>,
    pub evaluation: Evaluation,
    pub fairness_result: FairnessResult,
    pub public_status: PublicStatus,
}

/// Storage backend for evaluated documents.
pub trait DocumentStore: Send + Sync {
    /// Inserts or replaces the record under its hash.
    fn put(&self, record: DocumentRecord) -> Result<(), StoreError>;

    /// Looks a record up by content hash.
    fn get(&self, hash: &str) -> Result<Option<DocumentRecord>, StoreError>;

    /// Returns up to `limit` records, most recently uploaded first.
    fn recent(&self, limit: usize) -> Result<Vec<DocumentRecord>, StoreError>;
}

/// Process-local store. State lives only as long as the process; suitable for
/// single-instance deployments and tests.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, DocumentRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn put(&self, record: DocumentRecord) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        records.insert(record.hash.clone(), record);
        Ok(())
    }

    fn get(&self, hash: &str) -> Result<Option<DocumentRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(records.get(hash).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<DocumentRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let mut all: Vec<DocumentRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        all.truncate(limit);
        Ok(all)
    }
}
