//! Point lists of polygons and polylines.
//!
//! A [`Ring`] is a closed sequence of coordinates. As with closed contours in general, the last point is not a
//! duplicate of the first one: the closing segment is implied. Use [`Ring::iter_points_closing`] when a consumer
//! needs the first point repeated at the end.
//!
//! Neither builder checks rings for simplicity or self-intersection. That is left to whatever renders the shape.

use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coordinate;
use crate::error::{MapUtilError, Result, RingKind};

/// Closed ring of coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ring {
    points: Vec<Coordinate>,
}

impl Ring {
    /// Creates a new ring.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Points of the ring, without the closing point.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Iterates over the points and then repeats the first point, if any.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Coordinate> {
        self.points.iter().chain(self.points.first())
    }

    /// Bounds of the valid points of the ring.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_coordinates(&self.points)
    }

    /// Consumes the ring, returning its points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

impl Deref for Ring {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl AsRef<[Coordinate]> for Ring {
    fn as_ref(&self) -> &[Coordinate] {
        &self.points
    }
}

impl From<Vec<Coordinate>> for Ring {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

/// Polygon consisting of one outer ring and zero or more holes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PolygonRings"))]
pub struct PolygonGeometry {
    outer: Ring,
    holes: Vec<Ring>,
}

impl PolygonGeometry {
    /// Builds a polygon from the outer ring points and the hole point lists.
    ///
    /// Ring order and point order are kept exactly as given. Every ring must have at least one point.
    pub fn build<H: AsRef<[Coordinate]>>(outer: &[Coordinate], holes: &[H]) -> Result<Self> {
        if outer.is_empty() {
            return Err(MapUtilError::EmptyRing(RingKind::Outer));
        }

        let holes = holes
            .iter()
            .enumerate()
            .map(|(index, hole)| {
                let hole = hole.as_ref();
                if hole.is_empty() {
                    Err(MapUtilError::EmptyRing(RingKind::Hole(index)))
                } else {
                    Ok(Ring::new(hole.to_vec()))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            outer: Ring::new(outer.to_vec()),
            holes,
        })
    }

    /// Outer ring.
    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    /// Holes.
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Iterates over all rings starting with the outer one.
    pub fn iter_rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Bounds of the outer ring. Holes are inside the outer ring, so they do not extend it.
    pub fn bounds(&self) -> Option<Bounds> {
        self.outer.bounds()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PolygonRings {
    outer: Ring,
    #[serde(default)]
    holes: Vec<Ring>,
}

#[cfg(feature = "serde")]
impl TryFrom<PolygonRings> for PolygonGeometry {
    type Error = MapUtilError;

    fn try_from(rings: PolygonRings) -> Result<Self> {
        Self::build(&rings.outer, &rings.holes)
    }
}

impl From<Ring> for PolygonGeometry {
    fn from(outer: Ring) -> Self {
        Self {
            outer,
            holes: vec![],
        }
    }
}

/// Open sequence of at least two coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PolylinePoints"))]
pub struct PolylineGeometry {
    points: Vec<Coordinate>,
}

impl PolylineGeometry {
    /// Builds a polyline. Fails with [`MapUtilError::TooFewPoints`] for fewer than 2 points.
    pub fn build(points: &[Coordinate]) -> Result<Self> {
        Self::try_from(points.to_vec())
    }

    /// Points of the line.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Iterates over consecutive point pairs.
    pub fn iter_segments(&self) -> impl Iterator<Item = (&Coordinate, &Coordinate)> {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Bounds of the valid points of the line.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_coordinates(&self.points)
    }
}

impl TryFrom<Vec<Coordinate>> for PolylineGeometry {
    type Error = MapUtilError;

    fn try_from(points: Vec<Coordinate>) -> Result<Self> {
        if points.len() < 2 {
            return Err(MapUtilError::TooFewPoints(points.len()));
        }

        Ok(Self { points })
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PolylinePoints {
    points: Vec<Coordinate>,
}

#[cfg(feature = "serde")]
impl TryFrom<PolylinePoints> for PolylineGeometry {
    type Error = MapUtilError;

    fn try_from(line: PolylinePoints) -> Result<Self> {
        Self::try_from(line.points)
    }
}

impl Deref for PolylineGeometry {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use assert_matches::assert_matches;

    #[test]
    fn polygon_keeps_order() {
        let outer = [latlon!(0.0, 0.0), latlon!(0.0, 10.0), latlon!(10.0, 10.0)];
        let holes = vec![
            vec![latlon!(1.0, 1.0), latlon!(1.0, 2.0), latlon!(2.0, 2.0)],
            vec![latlon!(5.0, 5.0), latlon!(5.0, 6.0), latlon!(6.0, 6.0)],
        ];
        let polygon = PolygonGeometry::build(&outer, &holes).unwrap();

        assert_eq!(polygon.outer().points(), &outer);
        assert_eq!(polygon.holes().len(), 2);
        assert_eq!(polygon.holes()[0].points(), holes[0].as_slice());
        assert_eq!(polygon.holes()[1].points(), holes[1].as_slice());
        assert_eq!(polygon.iter_rings().count(), 3);
    }

    #[test]
    fn polygon_without_holes() {
        let outer = [latlon!(0.0, 0.0)];
        let polygon = PolygonGeometry::build::<Vec<Coordinate>>(&outer, &[]).unwrap();
        assert!(polygon.holes().is_empty());
    }

    #[test]
    fn empty_rings_are_rejected() {
        assert_matches!(
            PolygonGeometry::build::<Vec<Coordinate>>(&[], &[]),
            Err(MapUtilError::EmptyRing(RingKind::Outer))
        );

        let outer = [latlon!(0.0, 0.0), latlon!(0.0, 10.0), latlon!(10.0, 10.0)];
        let holes = vec![vec![latlon!(1.0, 1.0)], vec![]];
        assert_matches!(
            PolygonGeometry::build(&outer, &holes),
            Err(MapUtilError::EmptyRing(RingKind::Hole(1)))
        );
    }

    #[test]
    fn closing_iterator() {
        let ring = Ring::new(vec![latlon!(0.0, 0.0), latlon!(1.0, 0.0), latlon!(1.0, 1.0)]);
        let points: Vec<_> = ring.iter_points_closing().copied().collect();
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], points[0]);

        assert_eq!(Ring::default().iter_points_closing().count(), 0);
    }

    #[test]
    fn polyline_needs_two_points() {
        assert_matches!(
            PolylineGeometry::build(&[latlon!(1.0, 1.0)]),
            Err(MapUtilError::TooFewPoints(1))
        );
        assert_matches!(
            PolylineGeometry::build(&[]),
            Err(MapUtilError::TooFewPoints(0))
        );

        let line = PolylineGeometry::build(&[latlon!(1.0, 1.0), latlon!(2.0, 3.0)]).unwrap();
        assert_eq!(line.len(), 2);
        assert_eq!(line.iter_segments().count(), 1);
    }

    #[test]
    fn polyline_bounds() {
        let line = PolylineGeometry::build(&[
            latlon!(1.0, 4.0),
            latlon!(-2.0, 3.0),
            latlon!(0.0, 8.0),
        ])
        .unwrap();
        let bounds = line.bounds().unwrap();
        assert_eq!(bounds, Bounds::new(-2.0, 1.0, 3.0, 8.0).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_degenerate_shapes() {
        let line: PolylineGeometry =
            serde_json::from_str(r#"{"points":[{"lat":1,"lon":1},{"lat":2,"lon":3}]}"#).unwrap();
        assert_eq!(line.len(), 2);
        assert!(serde_json::from_str::<PolylineGeometry>(r#"{"points":[]}"#).is_err());
        assert!(
            serde_json::from_str::<PolylineGeometry>(r#"{"points":[{"lat":1,"lon":1}]}"#).is_err()
        );

        let outer = [latlon!(0.0, 0.0), latlon!(0.0, 10.0), latlon!(10.0, 10.0)];
        let polygon = PolygonGeometry::build(&outer, &[vec![latlon!(1.0, 1.0)]]).unwrap();
        let json = serde_json::to_string(&polygon).unwrap();
        assert_eq!(serde_json::from_str::<PolygonGeometry>(&json).unwrap(), polygon);

        assert!(
            serde_json::from_str::<PolygonGeometry>(r#"{"outer":{"points":[]},"holes":[]}"#).is_err()
        );
        assert!(serde_json::from_str::<PolygonGeometry>(
            r#"{"outer":{"points":[{"lat":0,"lon":0}]},"holes":[{"points":[]}]}"#
        )
        .is_err());
    }
}
