//! Workout records and the factory that builds them.
//!
//! A record is immutable once created: the derived metric and description are
//! computed here and never recomputed afterwards. "Editing" a workout destroys
//! it and creates a replacement with a fresh id.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::geometry::GeoPoint;
use crate::error::{Result, WaylogError};

/// Unique identifier for a workout record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutId(pub Uuid);

impl WorkoutId {
    /// Generate a fresh identifier.
    ///
    /// Random v4 ids stay distinct even when records are created back-to-back
    /// within the same clock tick.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Workout discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WorkoutKind {
    #[default]
    Running,
    Cycling,
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutKind::Running => write!(f, "Running"),
            WorkoutKind::Cycling => write!(f, "Cycling"),
        }
    }
}

/// Kind-specific payload with its derived metric, frozen at creation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute
        cadence: f64,
        /// Minutes per kilometer
        pace: f64,
    },
    Cycling {
        /// Meters climbed; may be zero or negative
        elevation_gain: f64,
        /// Kilometers per hour
        speed: f64,
    },
}

/// One logged exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: WorkoutId,

    /// Where the session happened
    pub coords: GeoPoint,

    /// Distance in kilometers
    pub distance: f64,

    /// Duration in minutes
    pub duration: f64,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// "<Kind> on <Month> <Day>", derived from kind and creation time
    pub description: String,

    /// Kind discriminant plus payload and derived metric
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

/// Input for the workout factory: the form fields plus the staged map position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDraft {
    Running {
        coords: GeoPoint,
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        coords: GeoPoint,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    },
}

impl WorkoutDraft {
    pub fn running(coords: GeoPoint, distance: f64, duration: f64, cadence: f64) -> Self {
        Self::Running { coords, distance, duration, cadence }
    }

    pub fn cycling(coords: GeoPoint, distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self::Cycling { coords, distance, duration, elevation_gain }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDraft::Running { .. } => WorkoutKind::Running,
            WorkoutDraft::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    fn base(&self) -> (GeoPoint, f64, f64) {
        match *self {
            WorkoutDraft::Running { coords, distance, duration, .. }
            | WorkoutDraft::Cycling { coords, distance, duration, .. } => {
                (coords, distance, duration)
            }
        }
    }
}

impl Workout {
    /// Build a validated workout from a draft, stamped with the current time
    pub fn create(draft: WorkoutDraft) -> Result<Self> {
        Self::create_at(draft, Utc::now())
    }

    /// Build a validated workout with an explicit creation time.
    ///
    /// Rejects non-finite or non-positive distance, duration, and cadence
    /// before anything is constructed. Elevation gain only has to be finite:
    /// a downhill-only ride legitimately loses elevation.
    pub fn create_at(draft: WorkoutDraft, created_at: DateTime<Utc>) -> Result<Self> {
        let (coords, distance, duration) = draft.base();
        require_positive("distance", distance)?;
        require_positive("duration", duration)?;

        let details = match draft {
            WorkoutDraft::Running { cadence, .. } => {
                require_positive("cadence", cadence)?;
                WorkoutDetails::Running { cadence, pace: derive_pace(distance, duration) }
            }
            WorkoutDraft::Cycling { elevation_gain, .. } => {
                require_finite("elevation", elevation_gain)?;
                WorkoutDetails::Cycling {
                    elevation_gain,
                    speed: derive_speed(distance, duration),
                }
            }
        };

        Ok(Self {
            id: WorkoutId::generate(),
            coords,
            distance,
            duration,
            created_at,
            description: describe(draft.kind(), created_at),
            details,
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// The kind-specific form value: cadence for running, elevation gain for cycling
    pub fn extra(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { cadence, .. } => cadence,
            WorkoutDetails::Cycling { elevation_gain, .. } => elevation_gain,
        }
    }
}

/// Pace in min/km
pub fn derive_pace(distance: f64, duration: f64) -> f64 {
    duration / distance
}

/// Speed in km/h
pub fn derive_speed(distance: f64, duration: f64) -> f64 {
    distance / (duration / 60.0)
}

/// "<Kind> on <Month> <Day>", e.g. "Running on April 14"
pub fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {} {}", kind, created_at.format("%B"), created_at.day())
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(WaylogError::InvalidInput { field, value });
    }
    Ok(())
}

fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(WaylogError::InvalidInput { field, value });
    }
    Ok(())
}
