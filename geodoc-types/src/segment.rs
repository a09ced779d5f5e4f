use crate::orient::Orientation;
use crate::point::{CartesianPoint2d, Point2d};
use crate::rect::Rect;

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Bounding rectangle of the segment.
    pub fn rect(&self) -> Rect {
        Rect::new(
            Point2d::new(self.0.x().min(self.1.x()), self.0.y().min(self.1.y())),
            Point2d::new(self.0.x().max(self.1.x()), self.0.y().max(self.1.y())),
        )
    }

    /// Position of the projection of `point` onto the segment line: `0` at the start, `1` at the
    /// end. A zero-length segment gives `0` for any point.
    pub fn fraction(&self, point: &impl CartesianPoint2d) -> f64 {
        let dx = self.1.x() - self.0.x();
        let dy = self.1.y() - self.0.y();
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return 0.0;
        }

        ((point.x() - self.0.x()) * dx + (point.y() - self.0.y()) * dy) / len_sq
    }

    /// Point at the given [`fraction`](Self::fraction) of the segment.
    pub fn point_at(&self, fraction: f64) -> Point2d {
        Point2d::new(
            self.0.x() + (self.1.x() - self.0.x()) * fraction,
            self.0.y() + (self.1.y() - self.0.y()) * fraction,
        )
    }

    /// Returns true if both ends of `other` lie on the infinite line through this segment.
    pub fn is_collinear<Q: CartesianPoint2d>(&self, other: &Segment<Q>) -> bool {
        Orientation::triplet(self.0, other.0, self.1) == Orientation::Collinear
            && Orientation::triplet(self.0, other.1, self.1) == Orientation::Collinear
    }

    /// Returns true if `point` lies on the segment, endpoints included.
    pub fn contains_point(&self, point: &impl CartesianPoint2d) -> bool {
        Orientation::triplet(self.0, point, self.1) == Orientation::Collinear
            && within_bounds(self.0, point, self.1)
    }

    /// Returns true, if the segment has at least one common point with the `other` segment.
    pub fn intersects<Q: CartesianPoint2d>(&self, other: &Segment<Q>) -> bool {
        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && within_bounds(self.0, other.0, self.1))
            || (o2 == Orientation::Collinear && within_bounds(self.0, other.1, self.1))
            || (o3 == Orientation::Collinear && within_bounds(other.0, self.0, other.1))
            || (o4 == Orientation::Collinear && within_bounds(other.0, self.1, other.1))
    }

    /// Returns true if the interiors of the segments cross at a single point.
    ///
    /// Touching at an endpoint and collinear overlap are not crossings.
    pub fn crosses<Q: CartesianPoint2d>(&self, other: &Segment<Q>) -> bool {
        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        o1 != Orientation::Collinear
            && o2 != Orientation::Collinear
            && o3 != Orientation::Collinear
            && o4 != Orientation::Collinear
            && o1 != o2
            && o3 != o4
    }
}

/// `q` is inside the bounding box of `p` and `r`.
fn within_bounds(
    p: &impl CartesianPoint2d,
    q: &impl CartesianPoint2d,
    r: &impl CartesianPoint2d,
) -> bool {
    q.x() <= p.x().max(r.x())
        && q.x() >= p.x().min(r.x())
        && q.y() <= p.y().max(r.y())
        && q.y() >= p.y().min(r.y())
}
