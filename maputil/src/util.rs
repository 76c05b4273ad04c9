//! Free-function versions of the region, bounds and shape operations.
//!
//! Each function forwards to the corresponding method of the value types; use whichever reads better at the call
//! site.

use crate::bounds::Bounds;
use crate::coord::Coordinate;
use crate::error::Result;
use crate::region::{Region, Span};
use crate::shape::{PolygonGeometry, PolylineGeometry};

pub use crate::extract::{coordinates_from_pairs, coordinates_from_points, extract_coordinates};
pub use crate::projection::map_points_from_values;
#[cfg(feature = "rand")]
pub use crate::random::{random_coords_in_region, random_float_in_range};

/// See [`Span::is_valid`].
pub fn is_valid_span(span: &Span) -> bool {
    span.is_valid()
}

/// See [`Region::is_valid`].
pub fn is_valid_region(region: &Region) -> bool {
    region.is_valid()
}

/// See [`Region::for_coordinates`].
pub fn region_for_coordinates<'a>(coords: impl IntoIterator<Item = &'a Coordinate>) -> Result<Region> {
    Region::for_coordinates(coords)
}

/// See [`Region::for_scaled_coordinates`].
pub fn region_for_scaled_coordinates<'a>(
    coords: impl IntoIterator<Item = &'a Coordinate>,
    scale: f64,
) -> Result<Region> {
    Region::for_scaled_coordinates(coords, scale)
}

/// See [`Region::scaled`].
pub fn scaled_region(region: &Region, scale: f64) -> Result<Region> {
    region.scaled(scale)
}

/// See [`Region::corners`].
pub fn region_corners(region: &Region) -> Result<[Coordinate; 4]> {
    region.corners()
}

/// See [`Bounds::to_region`].
pub fn bounds_to_region(bounds: &Bounds) -> Region {
    bounds.to_region()
}

/// See [`Region::to_bounds`].
pub fn region_to_bounds(region: &Region) -> Result<Bounds> {
    region.to_bounds()
}

/// See [`PolygonGeometry::build`].
pub fn build_polygon_points<H: AsRef<[Coordinate]>>(
    coords: &[Coordinate],
    holes: &[H],
) -> Result<PolygonGeometry> {
    PolygonGeometry::build(coords, holes)
}

/// See [`PolylineGeometry::build`].
pub fn build_polyline_points(coords: &[Coordinate]) -> Result<PolylineGeometry> {
    PolylineGeometry::build(coords)
}
