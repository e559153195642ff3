use crate::models::WorkoutKind;

/// Raw creation-form state, before validation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormFields {
    pub kind: WorkoutKind,

    /// Distance in kilometers
    pub distance: f64,

    /// Duration in minutes
    pub duration: f64,

    /// Cadence for running, elevation gain for cycling
    pub extra: f64,
}

/// Port for the workout creation form
pub trait WorkoutForm {
    /// Read the current field values
    fn read(&self) -> FormFields;

    /// Write field values back, for edit pre-fill
    fn prefill(&mut self, fields: &FormFields);

    /// Reset every field after a completed create
    fn clear(&mut self);
}
