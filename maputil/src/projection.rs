//! Projection of geographic coordinates onto the flat map plane.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::{Coordinate, GeoPoint};
use crate::extract::{extract_coordinates, DecodeCoordinate};

/// Converts points between two coordinate systems.
pub trait Projection {
    /// Point type of the source coordinate system.
    type InPoint;
    /// Point type of the target coordinate system.
    type OutPoint;

    /// Projects a point. Returns `None` if the point cannot be represented in the target system.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Inverse of [`Projection::project`].
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Ellipsoid parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
}

impl Datum {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
    };

    /// Semimajor axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

/// Point on the projected map plane, in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapPoint {
    /// Easting.
    pub x: f64,
    /// Northing.
    pub y: f64,
}

impl MapPoint {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Spherical Web Mercator projection (EPSG:3857).
///
/// Latitudes beyond [`WebMercator::MAX_LAT`] are outside of the square map and do not project.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator {
    datum: Datum,
}

impl WebMercator {
    /// Largest absolute latitude covered by the projection.
    pub const MAX_LAT: f64 = 85.05112877980659;
}

impl Projection for WebMercator {
    type InPoint = Coordinate;
    type OutPoint = MapPoint;

    fn project(&self, input: &Coordinate) -> Option<MapPoint> {
        if !input.is_valid() || input.lat().abs() > Self::MAX_LAT {
            return None;
        }

        let x = self.datum.semimajor() * input.lon_rad();
        let y = self.datum.semimajor() * (FRAC_PI_4 + input.lat_rad() / 2.0).tan().ln();

        if x.is_finite() && y.is_finite() {
            Some(MapPoint::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &MapPoint) -> Option<Coordinate> {
        let lat = 2.0 * (input.y / self.datum.semimajor()).exp().atan() - FRAC_PI_2;
        let lon = input.x / self.datum.semimajor();

        let coord = Coordinate::new(lat.to_degrees(), lon.to_degrees());
        coord.is_valid().then_some(coord)
    }
}

/// Extracts valid coordinates from the values (see [`extract_coordinates`]) and projects them with
/// [`WebMercator`]. Coordinates that cannot be projected, such as the poles, are dropped as well.
pub fn map_points_from_values<T: DecodeCoordinate>(
    values: impl IntoIterator<Item = T>,
) -> Vec<MapPoint> {
    let projection = WebMercator::default();
    let coords = extract_coordinates(values);
    let points: Vec<MapPoint> = coords.iter().filter_map(|c| projection.project(c)).collect();
    if points.len() < coords.len() {
        log::debug!(
            "Dropped {} coordinates that cannot be projected",
            coords.len() - points.len()
        );
    }

    points
}
