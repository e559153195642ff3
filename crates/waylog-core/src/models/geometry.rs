//! Coordinate types shared across the waylog crates.
//!
//! Latitude/longitude pairs serialize as a two-element `[lat, lng]` array to
//! stay compatible with the persisted snapshot schema.

use geo::algorithm::bounding_rect::BoundingRect;
use geo::{MultiPoint, Point};
use serde::{Deserialize, Serialize};

/// A WGS 84 latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> [f64; 2] {
        [point.lat, point.lng]
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Point<f64> {
        // geo convention is x = longitude, y = latitude
        Point::new(point.lng, point.lat)
    }
}

/// Axis-aligned box enclosing a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Smallest box enclosing every point, or `None` for an empty sequence
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let multi: MultiPoint<f64> = points.into_iter().map(Point::from).collect();
        let rect = multi.bounding_rect()?;

        Some(Self {
            south_west: GeoPoint::new(rect.min().y, rect.min().x),
            north_east: GeoPoint::new(rect.max().y, rect.max().x),
        })
    }
}
