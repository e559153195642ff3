use crate::error::Result;
use crate::models::{GeoBounds, GeoPoint};

/// Opaque reference to a visual pin on the map surface.
///
/// Handles are issued by the map surface and only ever handed back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Port for the external map widget
pub trait MapSurface {
    /// Drop a pin at the given coordinates and return its handle
    fn add_marker(&mut self, coords: GeoPoint, label: &str) -> MarkerHandle;

    /// Detach a previously placed pin; stale handles are ignored
    fn remove_marker(&mut self, handle: MarkerHandle);

    /// Center the view on a coordinate at the given zoom level
    fn set_view(&mut self, center: GeoPoint, zoom: u8);

    /// Zoom and pan so the whole box is visible, padded in screen pixels
    fn fit_bounds(&mut self, bounds: GeoBounds, padding: u32);
}

/// Port for the device geolocation service
pub trait LocationProvider {
    /// Resolve the device's current position.
    ///
    /// Fails with `LocationUnavailable` when the service is denied or absent;
    /// the map is then unusable for the session.
    fn current_position(&mut self) -> Result<GeoPoint>;
}
