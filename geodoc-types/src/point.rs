use approx::AbsDiffEq;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Longitude bound used by [`Point2d::valid_range`].
pub const MAX_LON: f64 = 180.0;
/// Latitude bound used by [`Point2d::valid_range`].
pub const MAX_LAT: f64 = 90.0;

/// Anything that has x and y coordinates on a flat plane.
pub trait CartesianPoint2d {
    /// X coordinate (longitude for geographic data).
    fn x(&self) -> f64;
    /// Y coordinate (latitude for geographic data).
    fn y(&self) -> f64;

    /// Exact coordinate equality.
    fn equal(&self, other: &impl CartesianPoint2d) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d) -> Vector2<f64> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d) -> f64 {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }
}

/// A point on the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2d {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if the point is a valid longitude/latitude pair.
    pub fn valid_range(&self) -> bool {
        (-MAX_LON..=MAX_LON).contains(&self.x) && (-MAX_LAT..=MAX_LAT).contains(&self.y)
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Point2d) -> Point2d {
        Point2d::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl CartesianPoint2d for Point2d {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<[f64; 2]> for Point2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2d> for [f64; 2] {
    fn from(p: Point2d) -> Self {
        [p.x, p.y]
    }
}

impl AbsDiffEq for Point2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
