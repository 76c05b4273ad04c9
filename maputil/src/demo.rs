//! Populating a map with a sample of every overlay kind.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::error::Result;
use crate::overlay::{Annotation, Overlay};
use crate::projection::Datum;
use crate::random::random_coords_in_region;
use crate::region::Region;
use crate::style::{Color, PathStyle};

/// Parameters of [`populate_scene`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Number of point annotations.
    pub annotation_count: usize,
    /// Number of vertices of the sample polygon.
    pub polygon_points: usize,
    /// Number of vertices of the sample polyline.
    pub polyline_points: usize,
    /// Circle radius as a fraction of the region's north-south extent.
    pub circle_fraction: f64,
    /// Scale of the region frame relative to the populated region.
    pub frame_scale: f64,
    /// Use random styles instead of the fixed ones.
    pub random_styles: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            annotation_count: 10,
            polygon_points: 6,
            polyline_points: 5,
            circle_fraction: 0.1,
            frame_scale: 0.9,
            random_styles: false,
        }
    }
}

impl SceneConfig {
    /// Creates a new instance from a copy of the current, but with the given annotation count.
    pub fn with_annotation_count(&self, annotation_count: usize) -> Self {
        Self {
            annotation_count,
            ..self.clone()
        }
    }

    /// Creates a new instance from a copy of the current, but with the given polygon and polyline vertex counts.
    pub fn with_shape_points(&self, polygon_points: usize, polyline_points: usize) -> Self {
        Self {
            polygon_points,
            polyline_points,
            ..self.clone()
        }
    }

    /// Creates a new instance from a copy of the current, but with the given region frame scale.
    pub fn with_frame_scale(&self, frame_scale: f64) -> Self {
        Self {
            frame_scale,
            ..self.clone()
        }
    }

    /// Creates a new instance from a copy of the current, but with random styles switched on or off.
    pub fn with_random_styles(&self, random_styles: bool) -> Self {
        Self {
            random_styles,
            ..self.clone()
        }
    }
}

/// Everything [`populate_scene`] generated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    /// The populated region.
    pub region: Region,
    /// Point annotations.
    pub annotations: Vec<Annotation>,
    /// Circle, polygon, polyline and region frame, in this order.
    pub overlays: Vec<Overlay>,
}

impl Scene {
    /// Smallest region containing every annotation and overlay.
    pub fn visible_region(&self) -> Result<Region> {
        let corners: Vec<Coordinate> = self
            .overlays
            .iter()
            .filter_map(Overlay::bounds)
            .flat_map(|b| {
                [
                    Coordinate::new(b.min_lat(), b.min_lon()),
                    Coordinate::new(b.max_lat(), b.max_lon()),
                ]
            })
            .chain(self.annotations.iter().map(|a| a.coordinate))
            .collect();

        Region::for_coordinates(&corners)
    }
}

/// Fills the region with sample annotations and overlays.
pub fn populate_scene(rng: &mut impl Rng, region: &Region, config: &SceneConfig) -> Result<Scene> {
    let region = region.validate()?;
    let mut style = |fixed: PathStyle| {
        if config.random_styles {
            PathStyle::random(&mut *rng)
        } else {
            fixed
        }
    };
    let circle_style = style(PathStyle::with_color_alpha(2.0, Color::RED, 0.2));
    let polygon_style = style(PathStyle::with_color_alpha(2.0, Color::BLUE, 0.2));
    let polyline_style = style(PathStyle::solid(3.0, Color::PURPLE));
    let frame_style = style(PathStyle::new(1.0, Color::GRAY, Color::TRANSPARENT));

    let annotations = random_coords_in_region(rng, &region, config.annotation_count)?
        .into_iter()
        .enumerate()
        .map(|(index, c)| {
            Annotation::new(c).map(|a| {
                a.with_title(format!("Point {}", index + 1))
                    .with_reuse_id("point")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let meters_per_degree = Datum::WGS84.semimajor().to_radians();
    let radius = region.span().lat_delta() * config.circle_fraction * meters_per_degree;

    let mut polygon_points = random_coords_in_region(rng, &region, config.polygon_points)?;
    sort_around(&mut polygon_points, &region.center());
    let polyline_points = random_coords_in_region(rng, &region, config.polyline_points)?;

    let overlays = vec![
        Overlay::circle(region.center(), radius, circle_style)?,
        Overlay::polygon::<Vec<Coordinate>>(&polygon_points, &[], polygon_style)?,
        Overlay::polyline(&polyline_points, polyline_style)?,
        Overlay::region(&region.scaled(config.frame_scale)?, frame_style)?,
    ];

    log::debug!(
        "Populated scene with {} annotations and {} overlays",
        annotations.len(),
        overlays.len()
    );

    Ok(Scene {
        region,
        annotations,
        overlays,
    })
}

/// Orders points by angle around the center, so that random points form a simple polygon.
fn sort_around(points: &mut [Coordinate], center: &Coordinate) {
    let angle = |c: &Coordinate| (c.lat() - center.lat()).atan2(c.lon() - center.lon());
    points.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapUtilError;
    use crate::latlon;
    use crate::region::Span;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn boston() -> Region {
        Region::new(latlon!(42.36, -71.06), Span::new(0.2, 0.3))
    }

    #[test]
    fn default_scene() {
        let mut rng = StdRng::seed_from_u64(42);
        let region = boston();
        let scene = populate_scene(&mut rng, &region, &SceneConfig::default()).unwrap();

        assert_eq!(scene.annotations.len(), 10);
        assert!(scene
            .annotations
            .iter()
            .all(|a| region.contains(&a.coordinate)));
        assert_eq!(scene.annotations[0].title.as_deref(), Some("Point 1"));

        assert_eq!(scene.overlays.len(), 4);
        assert_matches!(scene.overlays[0], Overlay::Circle { .. });
        assert_matches!(&scene.overlays[1], Overlay::Polygon { geometry, .. } if geometry.outer().len() == 6);
        assert_matches!(&scene.overlays[2], Overlay::Polyline { geometry, .. } if geometry.len() == 5);
        assert_matches!(scene.overlays[3], Overlay::Polygon { .. });
        assert_eq!(scene.overlays[2].style().stroke_color, Color::PURPLE);

        let visible = scene.visible_region().unwrap();
        assert!(visible.contains(&region.center()));
    }

    #[test]
    fn same_seed_same_scene() {
        let config = SceneConfig::default().with_random_styles(true);
        let a = populate_scene(&mut StdRng::seed_from_u64(9), &boston(), &config).unwrap();
        let b = populate_scene(&mut StdRng::seed_from_u64(9), &boston(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_config_is_reported() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SceneConfig::default().with_shape_points(3, 1);
        assert_matches!(
            populate_scene(&mut rng, &boston(), &config),
            Err(MapUtilError::TooFewPoints(1))
        );

        let config = SceneConfig::default().with_frame_scale(0.0);
        assert_matches!(
            populate_scene(&mut rng, &boston(), &config),
            Err(MapUtilError::InvalidScale(_))
        );

        let invalid = Region::new(latlon!(95.0, 0.0), Span::new(1.0, 1.0));
        assert_matches!(
            populate_scene(&mut rng, &invalid, &SceneConfig::default()),
            Err(MapUtilError::InvalidRegion { .. })
        );
    }
}
