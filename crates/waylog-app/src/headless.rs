//! Headless collaborator adapters.
//!
//! Stand-ins for the map widget, the geolocation service, and the creation
//! form. They back the example session and the integration tests; nothing in
//! them is test-only, so a host embedding waylog without a real map can use
//! them directly.

use std::collections::HashSet;

use waylog_core::error::{Result, WaylogError};
use waylog_core::models::{GeoBounds, GeoPoint};
use waylog_core::ports::{FormFields, LocationProvider, MapSurface, MarkerHandle, WorkoutForm};

/// Everything a map surface can be asked to do, recorded verbatim
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    AddMarker { coords: GeoPoint, label: String },
    RemoveMarker { handle: MarkerHandle },
    SetView { center: GeoPoint, zoom: u8 },
    FitBounds { bounds: GeoBounds, padding: u32 },
}

/// Map surface that records every call and tracks which pins are live
#[derive(Debug, Default)]
pub struct RecordingMapSurface {
    next_handle: u64,
    live: HashSet<MarkerHandle>,
    calls: Vec<MapCall>,
}

impl RecordingMapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    /// Number of pins currently on the surface
    pub fn live_markers(&self) -> usize {
        self.live.len()
    }
}

impl MapSurface for RecordingMapSurface {
    fn add_marker(&mut self, coords: GeoPoint, label: &str) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(handle);
        self.calls.push(MapCall::AddMarker { coords, label: label.to_string() });
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.live.remove(&handle);
        self.calls.push(MapCall::RemoveMarker { handle });
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.calls.push(MapCall::SetView { center, zoom });
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding: u32) {
        self.calls.push(MapCall::FitBounds { bounds, padding });
    }
}

/// Geolocation that always answers with a fixed position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoPoint);

impl LocationProvider for FixedLocation {
    fn current_position(&mut self) -> Result<GeoPoint> {
        Ok(self.0)
    }
}

/// Geolocation that always fails, like a denied browser prompt
#[derive(Debug, Clone, Copy)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current_position(&mut self) -> Result<GeoPoint> {
        Err(WaylogError::LocationUnavailable { reason: "permission denied".to_string() })
    }
}

/// Form whose fields are set programmatically
#[derive(Debug, Default)]
pub struct ScriptedForm {
    fields: FormFields,
}

impl ScriptedForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the values the next `read` will return
    pub fn enter(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    /// The current field values, as a pre-fill would leave them
    pub fn fields(&self) -> FormFields {
        self.fields
    }
}

impl WorkoutForm for ScriptedForm {
    fn read(&self) -> FormFields {
        self.fields
    }

    fn prefill(&mut self, fields: &FormFields) {
        self.fields = *fields;
    }

    fn clear(&mut self) {
        self.fields = FormFields::default();
    }
}
