//! Regions: a center coordinate plus a latitude/longitude span.

use approx::AbsDiffEq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::{Coordinate, MAX_LAT, MIN_LAT};
use crate::error::{MapUtilError, Result};
use crate::shape::Ring;

/// Extent of a region in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    lat_delta: f64,
    lon_delta: f64,
}

impl Span {
    /// Creates a new span. Use [`Span::is_valid`] to check the values.
    pub const fn new(lat_delta: f64, lon_delta: f64) -> Self {
        Self {
            lat_delta,
            lon_delta,
        }
    }

    /// North-south extent in degrees.
    pub fn lat_delta(&self) -> f64 {
        self.lat_delta
    }

    /// East-west extent in degrees.
    pub fn lon_delta(&self) -> f64 {
        self.lon_delta
    }

    /// Returns true if both deltas are finite and non-negative. A zero span is valid.
    pub fn is_valid(&self) -> bool {
        self.lat_delta.is_finite()
            && self.lon_delta.is_finite()
            && self.lat_delta >= 0.0
            && self.lon_delta >= 0.0
    }

    /// Returns true if either delta is zero.
    pub fn is_degenerate(&self) -> bool {
        self.lat_delta == 0.0 || self.lon_delta == 0.0
    }
}

impl AbsDiffEq for Span {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.lat_delta.abs_diff_eq(&other.lat_delta, epsilon)
            && self.lon_delta.abs_diff_eq(&other.lon_delta, epsilon)
    }
}

/// Rectangular geographic area given by its center and span.
///
/// Regions are plain values. Operations that derive a new region (scaling, bounding) return a new instance and
/// never modify the input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    center: Coordinate,
    span: Span,
}

impl Region {
    /// Creates a new region. Use [`Region::is_valid`] to check the values.
    pub const fn new(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }

    /// Center of the region.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Span of the region.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if the center and the span are valid and the region does not extend past either pole.
    pub fn is_valid(&self) -> bool {
        if !self.center.is_valid() || !self.span.is_valid() {
            return false;
        }

        let half = self.span.lat_delta / 2.0;
        self.center.lat() - half >= MIN_LAT && self.center.lat() + half <= MAX_LAT
    }

    /// Returns `self` if the region is valid, or [`MapUtilError::InvalidRegion`] otherwise.
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(self.invalid())
        }
    }

    fn invalid(&self) -> MapUtilError {
        MapUtilError::InvalidRegion {
            lat: self.center.lat(),
            lon: self.center.lon(),
            lat_delta: self.span.lat_delta,
            lon_delta: self.span.lon_delta,
        }
    }

    /// Minimal region enclosing all valid coordinates of the iterator. Invalid coordinates are skipped.
    ///
    /// Returns [`MapUtilError::NoValidCoordinates`] if there is nothing to enclose.
    pub fn for_coordinates<'a>(coords: impl IntoIterator<Item = &'a Coordinate>) -> Result<Self> {
        match Bounds::from_coordinates(coords) {
            Some(bounds) => Ok(bounds.to_region()),
            None => {
                log::debug!("Cannot compute region: no valid coordinates");
                Err(MapUtilError::NoValidCoordinates)
            }
        }
    }

    /// Same as [`Region::for_coordinates`], then scaled by `scale`.
    pub fn for_scaled_coordinates<'a>(
        coords: impl IntoIterator<Item = &'a Coordinate>,
        scale: f64,
    ) -> Result<Self> {
        Self::for_coordinates(coords)?.scaled(scale)
    }

    /// Returns a region with the same center and the span multiplied by `scale` on both axes.
    ///
    /// The region must be valid and `scale` must be finite and positive. The result is not clamped to the valid
    /// latitude range, so a large scale can produce a region that fails [`Region::is_valid`].
    pub fn scaled(&self, scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MapUtilError::InvalidScale(scale));
        }
        let region = self.validate()?;

        Ok(Self {
            center: region.center,
            span: Span::new(
                region.span.lat_delta * scale,
                region.span.lon_delta * scale,
            ),
        })
    }

    /// Corners of the region in the order north-west, north-east, south-east, south-west.
    pub fn corners(&self) -> Result<[Coordinate; 4]> {
        let region = self.validate()?;
        let half_lat = region.span.lat_delta / 2.0;
        let half_lon = region.span.lon_delta / 2.0;
        let north = region.center.lat() + half_lat;
        let south = region.center.lat() - half_lat;
        let west = region.center.lon() - half_lon;
        let east = region.center.lon() + half_lon;

        Ok([
            Coordinate::new(north, west),
            Coordinate::new(north, east),
            Coordinate::new(south, east),
            Coordinate::new(south, west),
        ])
    }

    /// Closed ring framing the region, with the points of [`Region::corners`].
    pub fn polygon(&self) -> Result<Ring> {
        Ok(Ring::new(Vec::from(self.corners()?)))
    }

    /// Converts the region into min/max bounds.
    ///
    /// The center and the span must be valid. A region reaching past a pole, such as the result of
    /// [`Region::scaled`], still converts and its bounds are not clipped.
    pub fn to_bounds(&self) -> Result<Bounds> {
        if !self.center.is_valid() || !self.span.is_valid() {
            return Err(self.invalid());
        }
        let half_lat = self.span.lat_delta / 2.0;
        let half_lon = self.span.lon_delta / 2.0;

        Bounds::new(
            self.center.lat() - half_lat,
            self.center.lat() + half_lat,
            self.center.lon() - half_lon,
            self.center.lon() + half_lon,
        )
    }

    /// Returns true if the coordinate lies inside the region or on its border. Regions that cannot be converted
    /// with [`Region::to_bounds`] contain nothing.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.to_bounds()
            .map(|bounds| bounds.contains(coord))
            .unwrap_or(false)
    }
}

impl AbsDiffEq for Region {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.span.abs_diff_eq(&other.span, epsilon)
    }
}
