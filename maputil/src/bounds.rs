//! Min/max latitude and longitude rectangle.

use approx::AbsDiffEq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::error::{MapUtilError, Result};
use crate::region::{Region, Span};

/// Axis-aligned geographic rectangle. Always non-inverted: `min_lat <= max_lat` and `min_lon <= max_lon`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoundsFields"))]
pub struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl Bounds {
    /// Creates new bounds. Fails if any value is not finite or the rectangle is inverted.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self> {
        let finite = [min_lat, max_lat, min_lon, max_lon]
            .iter()
            .all(|v| v.is_finite());
        if !finite || min_lat > max_lat || min_lon > max_lon {
            return Err(MapUtilError::InvalidBounds {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            });
        }

        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    fn from_coordinate(c: &Coordinate) -> Self {
        Self {
            min_lat: c.lat(),
            max_lat: c.lat(),
            min_lon: c.lon(),
            max_lon: c.lon(),
        }
    }

    /// Smallest bounds containing every valid coordinate of the iterator, in a single pass.
    ///
    /// Invalid coordinates are skipped. Returns `None` if there are no valid coordinates.
    pub fn from_coordinates<'a>(coords: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        let mut coords = coords.into_iter().filter(|c| c.is_valid());
        let first = coords.next()?;
        let mut bounds = Self::from_coordinate(first);

        for c in coords {
            if bounds.min_lat > c.lat() {
                bounds.min_lat = c.lat();
            }
            if bounds.max_lat < c.lat() {
                bounds.max_lat = c.lat();
            }
            if bounds.min_lon > c.lon() {
                bounds.min_lon = c.lon();
            }
            if bounds.max_lon < c.lon() {
                bounds.max_lon = c.lon();
            }
        }

        Some(bounds)
    }

    /// Minimum latitude.
    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    /// Maximum latitude.
    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Minimum longitude.
    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    /// Maximum longitude.
    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Converts the bounds into a center and span region.
    pub fn to_region(&self) -> Region {
        Region::new(
            self.center(),
            Span::new(self.max_lat - self.min_lat, self.max_lon - self.min_lon),
        )
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            min_lat: self.min_lat.min(other.min_lat),
            max_lat: self.max_lat.max(other.max_lat),
            min_lon: self.min_lon.min(other.min_lon),
            max_lon: self.max_lon.max(other.max_lon),
        }
    }

    /// Returns true if the coordinate lies inside the bounds or on the border.
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.min_lat <= c.lat()
            && self.max_lat >= c.lat()
            && self.min_lon <= c.lon()
            && self.max_lon >= c.lon()
    }
}

/// Unchecked form of [`Bounds`], only used while deserializing.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BoundsFields {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<BoundsFields> for Bounds {
    type Error = MapUtilError;

    fn try_from(f: BoundsFields) -> Result<Self> {
        Self::new(f.min_lat, f.max_lat, f.min_lon, f.max_lon)
    }
}

impl TryFrom<Region> for Bounds {
    type Error = MapUtilError;

    fn try_from(region: Region) -> Result<Self> {
        region.to_bounds()
    }
}

impl From<Bounds> for Region {
    fn from(bounds: Bounds) -> Self {
        bounds.to_region()
    }
}

impl AbsDiffEq for Bounds {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.min_lat.abs_diff_eq(&other.min_lat, epsilon)
            && self.max_lat.abs_diff_eq(&other.max_lat, epsilon)
            && self.min_lon.abs_diff_eq(&other.min_lon, epsilon)
            && self.max_lon.abs_diff_eq(&other.max_lon, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn rejects_inverted() {
        assert_matches!(
            Bounds::new(10.0, 0.0, 0.0, 1.0),
            Err(MapUtilError::InvalidBounds { .. })
        );
        assert_matches!(
            Bounds::new(0.0, 1.0, 5.0, 4.0),
            Err(MapUtilError::InvalidBounds { .. })
        );
        assert_matches!(
            Bounds::new(0.0, f64::NAN, 0.0, 1.0),
            Err(MapUtilError::InvalidBounds { .. })
        );
        assert!(Bounds::new(1.0, 1.0, 2.0, 2.0).is_ok());
    }

    #[test]
    fn region_conversion() {
        let bounds = Bounds::new(10.0, 30.0, 2.5, 27.5).unwrap();
        let region = bounds.to_region();
        assert_abs_diff_eq!(region.center(), latlon!(20.0, 15.0));
        assert_abs_diff_eq!(region.span(), Span::new(20.0, 25.0));

        let back = Bounds::try_from(region).unwrap();
        assert_abs_diff_eq!(back, bounds);
    }

    #[test]
    fn from_coordinates_skips_invalid() {
        let coords = [
            latlon!(f64::NAN, 0.0),
            latlon!(5.0, -5.0),
            latlon!(200.0, 0.0),
            latlon!(-5.0, 5.0),
        ];
        let bounds = Bounds::from_coordinates(&coords).unwrap();
        assert_eq!(bounds, Bounds::new(-5.0, 5.0, -5.0, 5.0).unwrap());

        assert!(Bounds::from_coordinates(&[latlon!(f64::NAN, 0.0)]).is_none());
    }

    #[test]
    fn merge() {
        let a = Bounds::new(0.0, 1.0, 0.0, 1.0).unwrap();
        let b = Bounds::new(-1.0, 0.5, 0.5, 3.0).unwrap();
        assert_eq!(a.merge(b), Bounds::new(-1.0, 1.0, 0.0, 3.0).unwrap());
        assert!(a.merge(b).contains(&latlon!(-1.0, 3.0)));
        assert!(!a.contains(&latlon!(-1.0, 3.0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_bounds() {
        let bounds: Bounds =
            serde_json::from_str(r#"{"min_lat":-1,"max_lat":1,"min_lon":2,"max_lon":3}"#).unwrap();
        assert_eq!(bounds, Bounds::new(-1.0, 1.0, 2.0, 3.0).unwrap());
        assert_eq!(
            serde_json::from_str::<Bounds>(&serde_json::to_string(&bounds).unwrap()).unwrap(),
            bounds
        );

        assert!(
            serde_json::from_str::<Bounds>(r#"{"min_lat":10,"max_lat":0,"min_lon":5,"max_lon":-5}"#)
                .is_err()
        );
    }
}
