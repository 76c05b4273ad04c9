//! Extraction of coordinate buffers from loosely typed input.
//!
//! Input collections may contain values that are not coordinates at all, or coordinates outside the valid range.
//! Extraction never fails because of them: such entries are dropped and the rest are returned in their original
//! order. Compare the buffer length with [`CoordinateBuffer::source_len`] (or check [`CoordinateBuffer::dropped`])
//! to find out whether anything was lost.

use std::ops::Deref;

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::{Coordinate, GeoPoint};

/// A value that may contain a coordinate.
pub trait DecodeCoordinate {
    /// Returns the coordinate stored in the value, or `None` if the value is not a coordinate. The returned
    /// coordinate is not required to be valid.
    fn decode_coordinate(&self) -> Option<Coordinate>;
}

impl DecodeCoordinate for Coordinate {
    fn decode_coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl<T: DecodeCoordinate> DecodeCoordinate for Option<T> {
    fn decode_coordinate(&self) -> Option<Coordinate> {
        self.as_ref()?.decode_coordinate()
    }
}

impl<T: DecodeCoordinate + ?Sized> DecodeCoordinate for &T {
    fn decode_coordinate(&self) -> Option<Coordinate> {
        (**self).decode_coordinate()
    }
}

/// Accepts `{"lat": .., "lon": ..}` and `{"latitude": .., "longitude": ..}` objects, with `"lng"` allowed for the
/// longitude key, and `[lat, lon]` arrays.
#[cfg(feature = "json")]
impl DecodeCoordinate for serde_json::Value {
    fn decode_coordinate(&self) -> Option<Coordinate> {
        use serde_json::Value;

        match self {
            Value::Object(map) => {
                let lat = map.get("lat").or_else(|| map.get("latitude"))?.as_f64()?;
                let lon = map
                    .get("lon")
                    .or_else(|| map.get("lng"))
                    .or_else(|| map.get("longitude"))?
                    .as_f64()?;
                Some(Coordinate::new(lat, lon))
            }
            Value::Array(values) => match values.as_slice() {
                [lat, lon] => Some(Coordinate::new(lat.as_f64()?, lon.as_f64()?)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Ordered valid coordinates retained from an input collection.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BufferFields"))]
pub struct CoordinateBuffer {
    coords: Vec<Coordinate>,
    source_len: usize,
}

impl CoordinateBuffer {
    /// Number of entries in the input the buffer was extracted from.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Number of input entries that were discarded.
    pub fn dropped(&self) -> usize {
        self.source_len.saturating_sub(self.coords.len())
    }

    /// Retained coordinates.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Consumes the buffer, returning the coordinates.
    pub fn into_vec(self) -> Vec<Coordinate> {
        self.coords
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BufferFields {
    coords: Vec<Coordinate>,
    #[serde(default)]
    source_len: usize,
}

/// Stored coordinates are filtered again. The source length never gets below the number of stored entries.
#[cfg(feature = "serde")]
impl From<BufferFields> for CoordinateBuffer {
    fn from(fields: BufferFields) -> Self {
        let source_len = fields.source_len.max(fields.coords.len());
        let coords = fields.coords.into_iter().filter(Coordinate::is_valid).collect();
        Self { coords, source_len }
    }
}

impl Deref for CoordinateBuffer {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.coords
    }
}

impl AsRef<[Coordinate]> for CoordinateBuffer {
    fn as_ref(&self) -> &[Coordinate] {
        &self.coords
    }
}

impl<'a> IntoIterator for &'a CoordinateBuffer {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl IntoIterator for CoordinateBuffer {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl FromIterator<Coordinate> for CoordinateBuffer {
    /// Collects coordinates, keeping only the valid ones.
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        collect_valid(iter.into_iter().map(Some))
    }
}

fn collect_valid(values: impl Iterator<Item = Option<Coordinate>>) -> CoordinateBuffer {
    let mut source_len = 0;
    let coords: Vec<Coordinate> = values
        .inspect(|_| source_len += 1)
        .flatten()
        .filter(Coordinate::is_valid)
        .collect();

    let buffer = CoordinateBuffer { coords, source_len };
    if buffer.dropped() > 0 {
        log::debug!(
            "Dropped {} of {} coordinate values",
            buffer.dropped(),
            buffer.source_len
        );
    }

    buffer
}

/// Decodes every value of the input and keeps the valid coordinates in input order.
pub fn extract_coordinates<T: DecodeCoordinate>(
    values: impl IntoIterator<Item = T>,
) -> CoordinateBuffer {
    collect_valid(values.into_iter().map(|v| v.decode_coordinate()))
}

/// Same as [`extract_coordinates`] for a list of `[lat, lon]` numeric lists. Lists that do not have exactly two
/// elements are dropped.
pub fn coordinates_from_pairs<N: Float, P: AsRef<[N]>>(
    pairs: impl IntoIterator<Item = P>,
) -> CoordinateBuffer {
    collect_valid(pairs.into_iter().map(|pair| match pair.as_ref() {
        [lat, lon] => Coordinate::from_point(&(*lat, *lon)),
        _ => None,
    }))
}

/// Same as [`extract_coordinates`] for anything implementing [`GeoPoint`], e.g. `(lat, lon)` tuples.
pub fn coordinates_from_points<P: GeoPoint>(points: impl IntoIterator<Item = P>) -> CoordinateBuffer {
    collect_valid(points.into_iter().map(|p| Coordinate::from_point(&p)))
}
