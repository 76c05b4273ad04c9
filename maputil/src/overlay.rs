//! Styled shapes and annotations to be shown on a map.
//!
//! These are plain values. A rendering layer is expected to match on [`Overlay`] and build whatever its platform
//! needs from the geometry and the [`PathStyle`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::error::{MapUtilError, Result};
use crate::projection::Datum;
use crate::region::Region;
use crate::shape::{PolygonGeometry, PolylineGeometry};
use crate::style::PathStyle;

/// A styled shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[cfg_attr(feature = "serde", serde(try_from = "OverlayFields"))]
pub enum Overlay {
    /// Circle around a point.
    Circle {
        /// Center of the circle.
        center: Coordinate,
        /// Radius in meters.
        radius: f64,
        /// Style.
        style: PathStyle,
    },
    /// Polygon, possibly with holes.
    Polygon {
        /// Point lists.
        geometry: PolygonGeometry,
        /// Style.
        style: PathStyle,
    },
    /// Open line.
    Polyline {
        /// Points of the line.
        geometry: PolylineGeometry,
        /// Style.
        style: PathStyle,
    },
}

impl Overlay {
    /// Circle with the radius in meters.
    pub fn circle(center: Coordinate, radius: f64, style: PathStyle) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(MapUtilError::InvalidRadius(radius));
        }

        Ok(Self::Circle {
            center: center.validate()?,
            radius,
            style,
        })
    }

    /// Polygon from the outer ring and holes. See [`PolygonGeometry::build`].
    pub fn polygon<H: AsRef<[Coordinate]>>(
        outer: &[Coordinate],
        holes: &[H],
        style: PathStyle,
    ) -> Result<Self> {
        Ok(Self::Polygon {
            geometry: PolygonGeometry::build(outer, holes)?,
            style,
        })
    }

    /// Polyline through the points. See [`PolylineGeometry::build`].
    pub fn polyline(points: &[Coordinate], style: PathStyle) -> Result<Self> {
        Ok(Self::Polyline {
            geometry: PolylineGeometry::build(points)?,
            style,
        })
    }

    /// Rectangle polygon framing the region.
    pub fn region(region: &Region, style: PathStyle) -> Result<Self> {
        Ok(Self::Polygon {
            geometry: region.polygon()?.into(),
            style,
        })
    }

    /// Circle showing the accuracy of a reported location.
    pub fn vicinity(location: &Location, style: PathStyle) -> Result<Self> {
        Self::circle(location.coordinate, location.horizontal_accuracy, style)
    }

    /// Style of the overlay.
    pub fn style(&self) -> &PathStyle {
        match self {
            Self::Circle { style, .. } | Self::Polygon { style, .. } | Self::Polyline { style, .. } => {
                style
            }
        }
    }

    /// Bounding rectangle of the overlay.
    ///
    /// For circles this uses a spherical Earth, and the result is clipped to the valid coordinate range.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Circle { center, radius, .. } => circle_bounds(center, *radius),
            Self::Polygon { geometry, .. } => geometry.bounds(),
            Self::Polyline { geometry, .. } => geometry.bounds(),
        }
    }
}

/// Unchecked form of [`Overlay`]. Shape geometries check themselves when deserialized, circles go through
/// [`Overlay::circle`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OverlayFields {
    Circle {
        center: Coordinate,
        radius: f64,
        style: PathStyle,
    },
    Polygon {
        geometry: PolygonGeometry,
        style: PathStyle,
    },
    Polyline {
        geometry: PolylineGeometry,
        style: PathStyle,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<OverlayFields> for Overlay {
    type Error = MapUtilError;

    fn try_from(fields: OverlayFields) -> Result<Self> {
        match fields {
            OverlayFields::Circle {
                center,
                radius,
                style,
            } => Self::circle(center, radius, style),
            OverlayFields::Polygon { geometry, style } => Ok(Self::Polygon { geometry, style }),
            OverlayFields::Polyline { geometry, style } => Ok(Self::Polyline { geometry, style }),
        }
    }
}

fn circle_bounds(center: &Coordinate, radius: f64) -> Option<Bounds> {
    let meters_per_degree = Datum::WGS84.semimajor().to_radians();
    let lat_delta = radius / meters_per_degree;
    let cos_lat = center.lat().to_radians().cos();
    let lon_delta = if cos_lat > f64::EPSILON {
        (lat_delta / cos_lat).min(MAX_LON)
    } else {
        MAX_LON
    };

    Bounds::new(
        (center.lat() - lat_delta).max(MIN_LAT),
        (center.lat() + lat_delta).min(MAX_LAT),
        (center.lon() - lon_delta).max(MIN_LON),
        (center.lon() + lon_delta).min(MAX_LON),
    )
    .ok()
}

/// A reported position of the user.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Position.
    pub coordinate: Coordinate,
    /// Radius of uncertainty in meters. Negative values mean the position is unknown.
    pub horizontal_accuracy: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(coordinate: Coordinate, horizontal_accuracy: f64) -> Self {
        Self {
            coordinate,
            horizontal_accuracy,
        }
    }

    /// Returns true if the coordinate is valid and the accuracy is known.
    pub fn is_valid(&self) -> bool {
        self.coordinate.is_valid()
            && self.horizontal_accuracy.is_finite()
            && self.horizontal_accuracy >= 0.0
    }
}

/// A marked point with optional texts and an image name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotation {
    /// Position of the annotation.
    pub coordinate: Coordinate,
    /// Title.
    pub title: Option<String>,
    /// Subtitle.
    pub subtitle: Option<String>,
    /// Identifier a renderer can use to reuse views between annotations.
    pub reuse_id: Option<String>,
    /// Name of the image to show instead of the default marker.
    pub image: Option<String>,
}

impl Annotation {
    /// Creates an annotation without any texts.
    pub fn new(coordinate: Coordinate) -> Result<Self> {
        Ok(Self {
            coordinate: coordinate.validate()?,
            title: None,
            subtitle: None,
            reuse_id: None,
            image: None,
        })
    }

    /// Annotation marking the user's location, with the coordinate as the subtitle.
    pub fn user(location: &Location, title: impl Into<String>) -> Result<Self> {
        let c = location.coordinate;
        Ok(Self::new(c)?
            .with_title(title)
            .with_subtitle(format!("{:.6}, {:.6}", c.lat(), c.lon())))
    }

    /// Creates a new instance from a copy of the current, but with the given title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Creates a new instance from a copy of the current, but with the given subtitle.
    pub fn with_subtitle(self, subtitle: impl Into<String>) -> Self {
        Self {
            subtitle: Some(subtitle.into()),
            ..self
        }
    }

    /// Creates a new instance from a copy of the current, but with the given reuse id.
    pub fn with_reuse_id(self, reuse_id: impl Into<String>) -> Self {
        Self {
            reuse_id: Some(reuse_id.into()),
            ..self
        }
    }

    /// Creates a new instance from a copy of the current, but with the given image.
    pub fn with_image(self, image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..self
        }
    }
}

/// Path following the changing location of the user.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trail {
    points: Vec<Coordinate>,
}

impl Trail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the location to the trail. Invalid locations and repeats of the last point are ignored.
    ///
    /// Returns true if the point was added.
    pub fn record(&mut self, location: &Location) -> bool {
        if !location.is_valid() {
            log::debug!("Ignoring invalid location {location:?}");
            return false;
        }
        if self.points.last() == Some(&location.coordinate) {
            return false;
        }

        self.points.push(location.coordinate);
        true
    }

    /// Recorded points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// The trail as a polyline. Fails until at least two points are recorded.
    pub fn polyline(&self) -> Result<PolylineGeometry> {
        PolylineGeometry::build(&self.points)
    }

    /// The trail as a polyline overlay.
    pub fn overlay(&self, style: PathStyle) -> Result<Overlay> {
        Overlay::polyline(&self.points, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use crate::region::Span;
    use crate::style::Color;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn circle_validation() {
        let style = PathStyle::default();
        assert_matches!(
            Overlay::circle(latlon!(0.0, 0.0), -1.0, style),
            Err(MapUtilError::InvalidRadius(_))
        );
        assert_matches!(
            Overlay::circle(latlon!(0.0, 0.0), f64::INFINITY, style),
            Err(MapUtilError::InvalidRadius(_))
        );
        assert_matches!(
            Overlay::circle(latlon!(100.0, 0.0), 1.0, style),
            Err(MapUtilError::InvalidCoordinate { .. })
        );
    }

    #[test]
    fn circle_bounds_at_equator() {
        let circle = Overlay::circle(latlon!(0.0, 0.0), 111_319.49, PathStyle::default()).unwrap();
        let bounds = circle.bounds().unwrap();
        assert_abs_diff_eq!(bounds.max_lat(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.min_lon(), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn circle_bounds_are_clipped() {
        let circle = Overlay::circle(latlon!(89.9, 0.0), 100_000.0, PathStyle::default()).unwrap();
        let bounds = circle.bounds().unwrap();
        assert_eq!(bounds.max_lat(), 90.0);
        assert_eq!(bounds.min_lon(), -180.0);
        assert_eq!(bounds.max_lon(), 180.0);
    }

    #[test]
    fn region_overlay() {
        let region = Region::new(latlon!(20.0, 15.0), Span::new(20.0, 25.0));
        let overlay = Overlay::region(&region, PathStyle::solid(1.0, Color::RED)).unwrap();

        let Overlay::Polygon { geometry, style } = &overlay else {
            panic!("expected polygon, got {overlay:?}");
        };
        assert_eq!(geometry.outer().len(), 4);
        assert!(geometry.holes().is_empty());
        assert_eq!(style.stroke_color, Color::RED);
        assert_eq!(overlay.bounds(), region.to_bounds().ok());
    }

    #[test]
    fn shape_errors_propagate() {
        let style = PathStyle::default();
        assert_matches!(
            Overlay::polyline(&[latlon!(0.0, 0.0)], style),
            Err(MapUtilError::TooFewPoints(1))
        );
        assert_matches!(
            Overlay::polygon::<Vec<Coordinate>>(&[], &[], style),
            Err(MapUtilError::EmptyRing(_))
        );
    }

    #[test]
    fn user_annotation() {
        let location = Location::new(latlon!(42.5, -71.25), 10.0);
        let annotation = Annotation::user(&location, "You").unwrap();
        assert_eq!(annotation.title.as_deref(), Some("You"));
        assert_eq!(annotation.subtitle.as_deref(), Some("42.500000, -71.250000"));
        assert!(annotation.image.is_none());

        let vicinity = Overlay::vicinity(&location, PathStyle::default()).unwrap();
        assert_matches!(vicinity, Overlay::Circle { radius, .. } if radius == 10.0);
    }

    #[test]
    fn trail() {
        let mut trail = Trail::new();
        assert!(trail.record(&Location::new(latlon!(1.0, 1.0), 5.0)));
        assert_matches!(trail.polyline(), Err(MapUtilError::TooFewPoints(1)));

        assert!(!trail.record(&Location::new(latlon!(1.0, 1.0), 5.0)));
        assert!(!trail.record(&Location::new(latlon!(2.0, 2.0), -1.0)));
        assert!(trail.record(&Location::new(latlon!(2.0, 2.0), 5.0)));

        let line = trail.polyline().unwrap();
        assert_eq!(line.points(), &[latlon!(1.0, 1.0), latlon!(2.0, 2.0)]);
        assert!(trail.overlay(PathStyle::default()).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn overlay_is_tagged() {
        let overlay = Overlay::circle(latlon!(1.0, 2.0), 3.0, PathStyle::default()).unwrap();
        let value = serde_json::to_value(&overlay).unwrap();
        assert_eq!(value["type"], "circle");
        assert_eq!(value["radius"], 3.0);

        let back: Overlay = serde_json::from_value(value).unwrap();
        assert_eq!(back, overlay);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_circle() {
        let circle = |center: &str, radius: &str| {
            format!(
                r##"{{"type":"circle","center":{center},"radius":{radius},"style":{{"line_width":1.0,"stroke_color":"#FF0000FF","fill_color":"#FF000040"}}}}"##
            )
        };

        let overlay: Overlay = serde_json::from_str(&circle(r#"{"lat":1,"lon":2}"#, "5")).unwrap();
        assert_matches!(overlay, Overlay::Circle { radius, .. } if radius == 5.0);

        assert!(serde_json::from_str::<Overlay>(&circle(r#"{"lat":1,"lon":2}"#, "-5")).is_err());
        assert!(serde_json::from_str::<Overlay>(&circle(r#"{"lat":95,"lon":2}"#, "5")).is_err());
        assert!(serde_json::from_str::<Overlay>(
            r##"{"type":"polyline","geometry":{"points":[]},"style":{"line_width":1.0,"stroke_color":"#FF0000FF","fill_color":"#FF0000FF"}}"##
        )
        .is_err());
    }
}
