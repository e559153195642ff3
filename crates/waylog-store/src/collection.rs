//! The authoritative workout collection.

use waylog_core::error::{Result, WaylogError};
use waylog_core::models::{Workout, WorkoutId};

/// Sole owner of the live workout records, insertion-ordered, oldest first.
///
/// The marker registry and the rendered list hold indices derived from this
/// collection, never the records themselves. The single-threaded
/// run-to-completion model means no handler ever observes a half-applied
/// mutation, so the collection needs no locking.
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    records: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// The factory guarantees fresh ids; a duplicate here means a caller broke
    /// the single-owner rule, so it is rejected rather than papered over.
    pub fn add(&mut self, record: Workout) -> Result<()> {
        if self.find(record.id).is_some() {
            return Err(WaylogError::DuplicateId { id: record.id });
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove the matching record, returning it; `None` if absent
    pub fn remove(&mut self, id: WorkoutId) -> Option<Workout> {
        let index = self.records.iter().position(|w| w.id == id)?;
        Some(self.records.remove(index))
    }

    /// Drop every record
    pub fn remove_all(&mut self) {
        self.records.clear();
    }

    /// Look up a record by id
    pub fn find(&self, id: WorkoutId) -> Option<&Workout> {
        self.records.iter().find(|w| w.id == id)
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole collection from loaded snapshots, oldest first
    pub fn replace_all(&mut self, records: Vec<Workout>) {
        self.records = records;
    }
}
