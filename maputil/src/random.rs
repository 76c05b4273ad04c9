//! Random values for populating test and demo maps.

use rand::Rng;

use crate::coord::Coordinate;
use crate::error::{MapUtilError, Result};
use crate::region::Region;

/// Uniformly distributed value between `a` and `b` (inclusive), in either order.
///
/// Fails with [`MapUtilError::InvalidRange`] if a bound is not finite or the range is too wide for `f64`.
pub fn random_float_in_range(rng: &mut impl Rng, a: f64, b: f64) -> Result<f64> {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if !(high - low).is_finite() {
        return Err(MapUtilError::InvalidRange { a, b });
    }
    if low == high {
        return Ok(low);
    }

    Ok(rng.random_range(low..=high))
}

/// `count` coordinates uniformly distributed inside the region.
pub fn random_coords_in_region(
    rng: &mut impl Rng,
    region: &Region,
    count: usize,
) -> Result<Vec<Coordinate>> {
    let bounds = region.validate()?.to_bounds()?;

    (0..count)
        .map(|_| {
            Ok(Coordinate::new(
                random_float_in_range(&mut *rng, bounds.min_lat(), bounds.max_lat())?,
                random_float_in_range(&mut *rng, bounds.min_lon(), bounds.max_lon())?,
            ))
        })
        .collect()
}
