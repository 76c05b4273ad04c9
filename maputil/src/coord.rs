//! Geographic coordinates (latitude and longitude in degrees).

use approx::AbsDiffEq;
use num_traits::{Float, ToPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MapUtilError, Result};

/// Minimum valid latitude.
pub const MIN_LAT: f64 = -90.0;
/// Maximum valid latitude.
pub const MAX_LAT: f64 = 90.0;
/// Minimum valid longitude.
pub const MIN_LON: f64 = -180.0;
/// Maximum valid longitude.
pub const MAX_LON: f64 = 180.0;

/// A point on the surface of the Earth given by latitude and longitude.
///
/// This trait lets aggregate operations accept anything that looks like a coordinate pair: [`Coordinate`] itself,
/// `(lat, lon)` tuples and `[lat, lon]` arrays of any float type.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Latitude/longitude pair in degrees.
///
/// The type itself does not enforce valid ranges, so that malformed input can be represented and then rejected by
/// [`Coordinate::is_valid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Copies any [`GeoPoint`] into a `Coordinate`. Returns `None` if a component cannot be represented as `f64`.
    pub fn from_point(point: &impl GeoPoint) -> Option<Self> {
        Some(Self {
            lat: point.lat().to_f64()?,
            lon: point.lon().to_f64()?,
        })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns true if both components are finite and inside the valid latitude and longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (MIN_LAT..=MAX_LAT).contains(&self.lat)
            && (MIN_LON..=MAX_LON).contains(&self.lon)
    }

    /// Returns `self` if the coordinate is valid, or [`MapUtilError::InvalidCoordinate`] otherwise.
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(MapUtilError::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

impl GeoPoint for Coordinate {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl<N: Float> GeoPoint for (N, N) {
    type Num = N;

    fn lat(&self) -> N {
        self.0
    }

    fn lon(&self) -> N {
        self.1
    }
}

impl<N: Float> GeoPoint for [N; 2] {
    type Num = N;

    fn lat(&self) -> N {
        self[0]
    }

    fn lon(&self) -> N {
        self[1]
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl AbsDiffEq for Coordinate {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new [`Coordinate`] from latitude and longitude values (in degrees).
///
/// ```
/// use maputil::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::coord::Coordinate::new($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_ranges() {
        assert!(latlon!(0.0, 0.0).is_valid());
        assert!(latlon!(90.0, 180.0).is_valid());
        assert!(latlon!(-90.0, -180.0).is_valid());
        assert!(!latlon!(90.1, 0.0).is_valid());
        assert!(!latlon!(0.0, -180.5).is_valid());
        assert!(!latlon!(f64::NAN, 0.0).is_valid());
        assert!(!latlon!(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn from_pairs_of_other_float_types() {
        let c = Coordinate::from_point(&(12.5f32, -3.25f32)).unwrap();
        assert_eq!(c, latlon!(12.5, -3.25));

        let c = Coordinate::from_point(&[1.0f64, 2.0]).unwrap();
        assert_eq!(c, latlon!(1.0, 2.0));
    }

    #[test]
    fn radians() {
        let c = latlon!(180.0, 90.0);
        approx::assert_abs_diff_eq!(c.lat_rad(), std::f64::consts::PI);
        approx::assert_abs_diff_eq!(c.lon_rad(), std::f64::consts::FRAC_PI_2);
    }
}
