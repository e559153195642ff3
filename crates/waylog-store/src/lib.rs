//! Waylog Store - The authoritative workout collection and its durable mirror
//!
//! This crate owns the insertion-ordered record collection, the persistence
//! adapter that snapshots it into key/value storage, and the storage backends.

pub mod backend;
pub mod collection;
pub mod persistence;

pub use backend::{FileStorage, MemoryStorage};
pub use collection::WorkoutStore;
pub use persistence::PersistenceAdapter;
