//! Persistence of summary records.
//!
//! Records are stored as JSON documents in a sled tree keyed by record id.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

use crate::core::models::SummaryRecord;
use crate::errors::SummarizeError;

/// Document store for summary records.
pub trait RecordStore: Send + Sync {
    /// Stores a new record and returns its id. The record is durable when
    /// this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written.
    fn save(&self, record: &SummaryRecord) -> Result<String, SummarizeError>;

    /// # Errors
    ///
    /// Returns an error if the stored document cannot be read or decoded.
    fn get(&self, id: &str) -> Result<Option<SummaryRecord>, SummarizeError>;

    fn count(&self) -> usize;

    /// # Errors
    ///
    /// Returns an error if pending writes cannot be flushed to disk.
    fn flush(&self) -> Result<(), SummarizeError>;
}

pub struct SledRecordStore {
    db: sled::Db,
    records: sled::Tree,
    /// Seeded from the tree on open, then maintained by `save`.
    count: AtomicUsize,
}

impl SledRecordStore {
    /// Open or create the store at `path`, using the tree `collection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, collection: &str) -> Result<Self, SummarizeError> {
        let db = sled::open(path.as_ref())?;
        info!(
            "Opened record store at {} (collection {})",
            path.as_ref().display(),
            collection
        );
        Self::with_db(db, collection)
    }

    /// In-memory store that is discarded on drop.
    ///
    /// # Errors
    ///
    /// Returns an error if sled cannot create the temporary database.
    pub fn temporary(collection: &str) -> Result<Self, SummarizeError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::with_db(db, collection)
    }

    fn with_db(db: sled::Db, collection: &str) -> Result<Self, SummarizeError> {
        let records = db.open_tree(collection)?;
        let count = AtomicUsize::new(records.len());
        Ok(Self {
            db,
            records,
            count,
        })
    }
}

impl RecordStore for SledRecordStore {
    fn save(&self, record: &SummaryRecord) -> Result<String, SummarizeError> {
        let value = serde_json::to_vec(record)
            .map_err(|e| SummarizeError::StorageError(e.to_string()))?;
        if self.records.insert(record.id.as_bytes(), value)?.is_none() {
            self.count.fetch_add(1, Ordering::Relaxed);
        }
        self.records.flush()?;
        Ok(record.id.clone())
    }

    fn get(&self, id: &str) -> Result<Option<SummaryRecord>, SummarizeError> {
        match self.records.get(id.as_bytes())? {
            Some(data) => serde_json::from_slice(&data)
                .map(Some)
                .map_err(|e| SummarizeError::StorageError(e.to_string())),
            None => Ok(None),
        }
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    fn flush(&self) -> Result<(), SummarizeError> {
        self.db.flush()?;
        Ok(())
    }
}
