//! Interop with the [`geo_types`] crate.

use geo_types::{coord, Coord, LineString, Polygon};

use crate::contour::{Contour, Line, Ring};
use crate::point::{CartesianPoint2d, Point2d};
use crate::polygon::Poly;
use crate::rect::Rect;

impl CartesianPoint2d for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl CartesianPoint2d for geo_types::Point<f64> {
    fn x(&self) -> f64 {
        self.0.x
    }

    fn y(&self) -> f64 {
        self.0.y
    }
}

impl From<Coord<f64>> for Point2d {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point2d> for Coord<f64> {
    fn from(value: Point2d) -> Self {
        coord!(x: value.x, y: value.y)
    }
}

impl From<&LineString<f64>> for Line {
    fn from(value: &LineString<f64>) -> Self {
        Line::new(value.coords().map(|&c| c.into()).collect())
    }
}

impl From<&Line> for LineString<f64> {
    fn from(value: &Line) -> Self {
        value.points().iter().map(|&p| Coord::from(p)).collect()
    }
}

impl From<&LineString<f64>> for Ring {
    fn from(value: &LineString<f64>) -> Self {
        Ring::new(value.coords().map(|&c| c.into()).collect())
    }
}

impl From<&Polygon<f64>> for Poly {
    fn from(value: &Polygon<f64>) -> Self {
        Poly::new(
            value.exterior().into(),
            value.interiors().iter().map(Ring::from).collect(),
        )
    }
}

impl From<&Poly> for Polygon<f64> {
    fn from(value: &Poly) -> Self {
        let ring = |r: &Ring| -> LineString<f64> {
            r.points().iter().map(|&p| Coord::from(p)).collect()
        };

        // `Polygon::new` closes the rings that are not closed already
        Polygon::new(ring(value.exterior()), value.holes().iter().map(ring).collect())
    }
}

impl From<geo_types::Rect<f64>> for Rect {
    fn from(value: geo_types::Rect<f64>) -> Self {
        Rect::new(value.min().into(), value.max().into())
    }
}
