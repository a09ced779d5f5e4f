use crate::error::GeometryError;
use crate::point::{CartesianPoint2d, Point2d};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its lower-left and upper-right corners.
///
/// A rectangle with `min == max` is a point.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Lower-left corner.
    pub min: Point2d,
    /// Upper-right corner.
    pub max: Point2d,
}

impl Rect {
    /// Creates a new rectangle from its corners.
    pub const fn new(min: Point2d, max: Point2d) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from the corner coordinates.
    pub const fn from_coords(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            min: Point2d::new(x_min, y_min),
            max: Point2d::new(x_max, y_max),
        }
    }

    /// Degenerate rectangle covering a single point.
    pub fn from_point(p: &impl CartesianPoint2d) -> Self {
        let p = Point2d::new(p.x(), p.y());
        Self { min: p, max: p }
    }

    /// Smallest rectangle containing all the points, or `None` for an empty iterator.
    pub fn from_points<'a, P: CartesianPoint2d + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut rect = Self::from_point(first);
        for p in points {
            rect.min.x = rect.min.x.min(p.x());
            rect.min.y = rect.min.y.min(p.y());
            rect.max.x = rect.max.x.max(p.x());
            rect.max.y = rect.max.y.max(p.y());
        }

        Some(rect)
    }

    /// Builds a rectangle from a GeoJSON `bbox` tuple.
    ///
    /// The tuple holds `2 * N` numbers for `N >= 2` dimensions: all the minimums first, then all the
    /// maximums. Only the first two axes are used.
    pub fn from_bbox(values: &[f64]) -> Result<Self, GeometryError> {
        if values.len() < 4 || values.len() % 2 != 0 {
            return Err(GeometryError::Conversion(format!(
                "bbox must contain an even number of at least 4 values, got {}",
                values.len()
            )));
        }

        let dims = values.len() / 2;
        Ok(Self::from_coords(
            values[0],
            values[1],
            values[dims],
            values[dims + 1],
        ))
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns true if the rectangle collapses into a single point.
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point2d {
        self.min.midpoint(&self.max)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self::from_coords(
            self.min.x.min(other.min.x),
            self.min.y.min(other.min.y),
            self.max.x.max(other.max.x),
            self.max.y.max(other.max.y),
        )
    }

    /// Union of all the rectangles, or `None` if there are none.
    pub fn merge_all(rects: impl IntoIterator<Item = Rect>) -> Option<Self> {
        rects.into_iter().reduce(|acc, rect| acc.merge(rect))
    }

    /// Returns true if the rectangles overlap. Touching edges count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns true if `other` lies inside or on the boundary of `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }

    /// Returns true if the point lies inside or on the boundary of the rectangle.
    pub fn contains_point(&self, point: &impl CartesianPoint2d) -> bool {
        self.min.x <= point.x()
            && self.max.x >= point.x()
            && self.min.y <= point.y()
            && self.max.y >= point.y()
    }

    /// Corners of the rectangle as a closed ring, counterclockwise from `min`.
    pub fn ring_points(&self) -> [Point2d; 5] {
        [
            self.min,
            Point2d::new(self.max.x, self.min.y),
            self.max,
            Point2d::new(self.min.x, self.max.y),
            self.min,
        ]
    }
}
