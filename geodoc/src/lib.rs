//! Lossless GeoJSON object model with planar spatial predicates.
//!
//! A document is parsed into an [`Object`], one of the GeoJSON kinds plus [`Rectangle`] for
//! query areas built in code. Objects can be compared with [`GeoObject::intersects`],
//! [`GeoObject::contains`] and [`GeoObject::within`] regardless of their kinds, and serialized
//! back with [`GeoObject::to_json`].
//!
//! Serialization keeps everything the parser does not interpret: members other than `type` and
//! the payload (`properties`, `id`, foreign members), the `bbox` member exactly as written, and
//! the `z` and `m` coordinates of positions.
//!
//! ```
//! use geodoc::{GeoObject, Object};
//!
//! let area: Object = r#"{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]]]}"#
//!     .parse()
//!     .unwrap();
//! let pin: Object = r#"{"type":"Point","coordinates":[5,5,120],"name":"pin"}"#.parse().unwrap();
//!
//! assert!(area.contains(&pin));
//! assert_eq!(pin.to_json(), r#"{"type":"Point","coordinates":[5,5,120],"name":"pin"}"#);
//! ```
//!
//! Geometry math lives in the [`geodoc_types`] crate, which is re-exported.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod codec;
pub mod collection;
pub mod error;
pub mod extra;
pub mod index;
mod object;
pub mod objects;
pub mod options;

pub use error::ParseError;
pub use object::{GeoObject, Object, ObjectKind};
pub use objects::{
    Feature, FeatureCollection, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Rectangle,
};
pub use options::ParseOptions;

// Reexport geodoc_types
pub use geodoc_types;

/// Parses a GeoJSON document of any kind.
pub fn parse(input: &str, options: &ParseOptions) -> Result<Object, ParseError> {
    Object::parse(input, options)
}

#[cfg(test)]
mod tests;
