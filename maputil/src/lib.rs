//! Coordinate, region and shape utilities for map overlays.
//!
//! The crate works with plain values: [`Coordinate`], [`Region`] (center and span), [`Bounds`] (min/max
//! rectangle), coordinate buffers extracted from loosely typed input, and polygon/polyline point lists. Styled
//! [`Overlay`] values wrap the geometries for a rendering layer to consume.
//!
//! ```
//! use maputil::{latlon, Region};
//!
//! let region = Region::for_coordinates(&[latlon!(10.0, 10.0), latlon!(30.0, 20.0)]).unwrap();
//! assert_eq!(region.center(), latlon!(20.0, 15.0));
//!
//! let [nw, ne, se, sw] = region.corners().unwrap();
//! assert_eq!(nw, latlon!(30.0, 10.0));
//! assert_eq!(se, latlon!(10.0, 20.0));
//! # let _ = (ne, sw);
//! ```

pub mod bounds;
pub mod coord;
pub mod error;
pub mod extract;
pub mod overlay;
pub mod projection;
pub mod region;
pub mod shape;
pub mod style;
pub mod util;

#[cfg(feature = "rand")]
pub mod demo;
#[cfg(feature = "rand")]
pub mod random;

pub use bounds::Bounds;
pub use coord::{Coordinate, GeoPoint};
pub use error::{MapUtilError, Result, RingKind};
pub use extract::{extract_coordinates, CoordinateBuffer, DecodeCoordinate};
pub use overlay::{Annotation, Location, Overlay, Trail};
pub use projection::{MapPoint, Projection, WebMercator};
pub use region::{Region, Span};
pub use shape::{PolygonGeometry, PolylineGeometry, Ring};
pub use style::{Color, PathStyle};
