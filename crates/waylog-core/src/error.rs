//! Error types for waylog

use thiserror::Error;

use crate::models::WorkoutId;

#[derive(Debug, Error)]
pub enum WaylogError {
    // Validation errors
    #[error("invalid {field} input: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("no map position staged for a new workout")]
    NoStagedPosition,

    // Collection integrity errors
    #[error("workout {id} is already in the collection")]
    DuplicateId { id: WorkoutId },

    // Geolocation errors
    #[error("geolocation unavailable: {reason}")]
    LocationUnavailable { reason: String },

    // Configuration errors
    #[error("invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, WaylogError>;
