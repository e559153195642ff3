//! Durable snapshot of the workout collection.
//!
//! The adapter mirrors the collection as of the last save; it is not live and
//! must be explicitly reloaded. Loaded records are plain data snapshots: they
//! are not re-validated and their derived metrics are not recomputed, so a
//! snapshot written before a metric-formula change keeps its old values after
//! a reload. Correcting them on load would be a silent schema migration and
//! needs a product decision first.

use waylog_core::error::{Result, WaylogError};
use waylog_core::models::Workout;
use waylog_core::ports::StorageBackend;

/// Serializes the record collection as one ordered JSON list under a fixed key
#[derive(Debug)]
pub struct PersistenceAdapter<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> PersistenceAdapter<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// The storage key snapshots are saved under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot the records, oldest first, replacing the previous snapshot
    pub fn save<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Workout>,
    {
        let snapshots: Vec<&Workout> = records.into_iter().collect();
        let json = serde_json::to_string(&snapshots)
            .map_err(|e| WaylogError::Serialization(e.to_string()))?;
        self.backend.set_item(&self.key, &json)
    }

    /// Load the saved snapshot list.
    ///
    /// An absent key, an unreadable backend, or malformed data all degrade to
    /// an empty collection; loading never fails.
    pub fn load(&self) -> Vec<Workout> {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read persisted workouts, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Persisted workout data is malformed, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Remove the key entirely
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove_item(&self.key)
    }

    /// Hand the backend back, e.g. to open the next session on the same data
    pub fn into_backend(self) -> B {
        self.backend
    }
}
