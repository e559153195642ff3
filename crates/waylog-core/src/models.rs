pub mod geometry;
pub mod workout;

pub use geometry::{GeoBounds, GeoPoint};
pub use workout::{Workout, WorkoutDetails, WorkoutDraft, WorkoutId, WorkoutKind};
