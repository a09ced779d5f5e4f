//! Object variants.

mod feature;
mod feature_collection;
mod geometry_collection;
mod line_string;
mod multi;
mod point;
mod polygon;
mod rectangle;

pub use feature::Feature;
pub use feature_collection::FeatureCollection;
pub use geometry_collection::GeometryCollection;
pub use line_string::LineString;
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

/// Payload member of the geometry variants.
pub(crate) const COORDINATES: &str = "coordinates";
