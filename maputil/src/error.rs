//! Error type used by the crate.

use thiserror::Error;

/// Identifies a ring of a polygon.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RingKind {
    /// The outer boundary.
    Outer,
    /// Inner ring (hole) with the given index.
    Hole(usize),
}

impl std::fmt::Display for RingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RingKind::Outer => write!(f, "outer ring"),
            RingKind::Hole(index) => write!(f, "hole {index}"),
        }
    }
}

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapUtilError {
    /// Input contained no coordinate that could be used.
    #[error("no valid coordinates in input")]
    NoValidCoordinates,
    /// Coordinate is not finite or out of range.
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate {
        /// Latitude.
        lat: f64,
        /// Longitude.
        lon: f64,
    },
    /// Region has an invalid center or span, or extends past the poles.
    #[error("invalid region: center ({lat}, {lon}), span ({lat_delta}, {lon_delta})")]
    InvalidRegion {
        /// Center latitude.
        lat: f64,
        /// Center longitude.
        lon: f64,
        /// Latitude delta.
        lat_delta: f64,
        /// Longitude delta.
        lon_delta: f64,
    },
    /// Bounds are inverted or not finite.
    #[error("invalid bounds: lat {min_lat}..{max_lat}, lon {min_lon}..{max_lon}")]
    InvalidBounds {
        /// Minimum latitude.
        min_lat: f64,
        /// Maximum latitude.
        max_lat: f64,
        /// Minimum longitude.
        min_lon: f64,
        /// Maximum longitude.
        max_lon: f64,
    },
    /// Scale factor must be finite and positive.
    #[error("invalid scale factor: {0}")]
    InvalidScale(f64),
    /// Circle radius must be finite and non-negative.
    #[error("invalid circle radius: {0}")]
    InvalidRadius(f64),
    /// Random range bounds or their distance are not finite.
    #[error("invalid random range: {a}..={b}")]
    InvalidRange {
        /// First bound.
        a: f64,
        /// Second bound.
        b: f64,
    },
    /// Color string is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    /// A polygon ring has no points.
    #[error("{0} has no points")]
    EmptyRing(RingKind),
    /// A polyline needs at least two points.
    #[error("polyline needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

/// Result alias with [`MapUtilError`] as the default error.
pub type Result<T, E = MapUtilError> = std::result::Result<T, E>;
