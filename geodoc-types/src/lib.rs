//! Planar geometry kernel of the `geodoc` object model.
//!
//! The kernel works with four primitives: [`Point2d`], [`Rect`], [`Line`] and [`Poly`]. Any
//! geometry can be decomposed into a set of these primitives, and [`Geom`] defines the
//! `intersects` and `contains` predicates for every pair of them.
//!
//! Coordinates are treated as flat cartesian `x`/`y` values. Longitude/latitude ranges are only
//! checked by the `valid_range` methods.

pub mod contour;
pub mod error;
mod geometry;
pub mod orient;
mod point;
pub mod polygon;
mod rect;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use contour::{Contour, Line, Ring};
pub use error::GeometryError;
pub use geometry::Geom;
pub use point::{CartesianPoint2d, Point2d, MAX_LAT, MAX_LON};
pub use polygon::{Location, Poly};
pub use rect::Rect;
