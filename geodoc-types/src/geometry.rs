use crate::contour::{Contour, Line};
use crate::point::Point2d;
use crate::polygon::Poly;
use crate::rect::Rect;

/// A borrowed kernel primitive.
///
/// Every geometry of the object model decomposes into a set of these, and every pair of them has
/// a defined `intersects` and `contains` rule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geom<'a> {
    /// Single point.
    Point(Point2d),
    /// Axis-aligned rectangle, treated as a filled area.
    Rect(Rect),
    /// Open polyline.
    Line(&'a Line),
    /// Polygon with holes.
    Poly(&'a Poly),
}

impl Geom<'_> {
    /// Bounding rectangle of the primitive.
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Geom::Point(p) => Rect::from_point(p),
            Geom::Rect(r) => *r,
            Geom::Line(l) => l.rect(),
            Geom::Poly(p) => p.rect(),
        }
    }

    /// Returns true if the primitive has no coordinates.
    pub fn is_empty(&self) -> bool {
        match self {
            Geom::Point(_) | Geom::Rect(_) => false,
            Geom::Line(l) => l.is_empty(),
            Geom::Poly(p) => p.is_empty(),
        }
    }

    /// Returns true if the point lies inside or on the boundary of the primitive.
    pub fn contains_point(&self, point: &Point2d) -> bool {
        match self {
            Geom::Point(p) => p == point,
            Geom::Rect(r) => r.contains_point(point),
            Geom::Line(l) => l.contains_point(point),
            Geom::Poly(p) => p.contains_point(point),
        }
    }

    /// Returns true if the primitives have at least one common point.
    pub fn intersects(&self, other: &Geom) -> bool {
        if self.is_empty()
            || other.is_empty()
            || !self.bounding_rect().intersects(&other.bounding_rect())
        {
            return false;
        }

        match (*self, *other) {
            (Geom::Point(p), g) | (g, Geom::Point(p)) => g.contains_point(&p),
            (Geom::Rect(_), Geom::Rect(_)) => true,
            (Geom::Rect(r), Geom::Line(l)) | (Geom::Line(l), Geom::Rect(r)) => {
                Poly::from(r).intersects_line(l)
            }
            (Geom::Rect(r), Geom::Poly(p)) | (Geom::Poly(p), Geom::Rect(r)) => {
                p.intersects_poly(&Poly::from(r))
            }
            (Geom::Line(a), Geom::Line(b)) => a.intersects_line(b),
            (Geom::Line(l), Geom::Poly(p)) | (Geom::Poly(p), Geom::Line(l)) => {
                p.intersects_line(l)
            }
            (Geom::Poly(a), Geom::Poly(b)) => a.intersects_poly(b),
        }
    }

    /// Returns true if every point of `other` lies inside or on the boundary of `self`.
    pub fn contains(&self, other: &Geom) -> bool {
        if self.is_empty()
            || other.is_empty()
            || !self.bounding_rect().contains_rect(&other.bounding_rect())
        {
            return false;
        }

        match (*self, *other) {
            (g, Geom::Point(p)) => g.contains_point(&p),
            // `other` collapses into the point or the rectangle after the rect check above
            (Geom::Point(_), _) | (Geom::Rect(_), _) => true,
            (Geom::Line(l), Geom::Rect(r)) => {
                (r.width() == 0.0 || r.height() == 0.0)
                    && l.contains_line(&Line::new(vec![r.min, r.max]))
            }
            (Geom::Line(a), Geom::Line(b)) => a.contains_line(b),
            (Geom::Line(l), Geom::Poly(p)) => {
                p.exterior().area_signed() == 0.0 && l.contains_line(p.exterior())
            }
            (Geom::Poly(p), Geom::Rect(r)) => p.contains_poly(&Poly::from(r)),
            (Geom::Poly(p), Geom::Line(l)) => p.contains_line(l),
            (Geom::Poly(a), Geom::Poly(b)) => a.contains_poly(b),
        }
    }
}

impl From<Point2d> for Geom<'_> {
    fn from(value: Point2d) -> Self {
        Self::Point(value)
    }
}

impl From<Rect> for Geom<'_> {
    fn from(value: Rect) -> Self {
        Self::Rect(value)
    }
}

impl<'a> From<&'a Line> for Geom<'a> {
    fn from(value: &'a Line) -> Self {
        Self::Line(value)
    }
}

impl<'a> From<&'a Poly> for Geom<'a> {
    fn from(value: &'a Poly) -> Self {
        Self::Poly(value)
    }
}
