//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - the first and the last points of the contour are not connected. A road or a GPS
//!   track is an open contour, see [`Line`].
//! * **closed** - the last point connects back to the first one. A lake shore is a closed
//!   contour, see [`Ring`].
//!
//! # Closing point
//!
//! GeoJSON linear rings repeat the first point at the end. A [`Ring`] keeps its points exactly as
//! they were given so that they can be written back unchanged, and [`Contour::iter_segments`]
//! only adds the closing segment when the last point differs from the first one.

use crate::point::{CartesianPoint2d, Point2d};
use crate::polygon::Location;
use crate::rect::Rect;
use crate::segment::Segment;
use serde::{Deserialize, Serialize};

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Points of the contour as stored.
    fn points(&self) -> &[Point2d];

    /// Whether the contour is closed.
    fn is_closed(&self) -> bool;

    /// Bounding rectangle of the contour.
    fn rect(&self) -> Rect;

    /// Iterates over the points, repeating the first point at the end for closed contours that
    /// do not repeat it already.
    fn iter_points_closing(&self) -> ContourPointsIterator<'_> {
        ContourPointsIterator::new(self.points(), self.is_closed())
    }

    /// Iterates over segments of the contour, including the closing segment of closed contours.
    fn iter_segments(&self) -> ContourSegmentIterator<'_> {
        ContourSegmentIterator::new(self.iter_points_closing())
    }

    /// Returns true if the point lies on one of the contour's segments.
    fn touches_point(&self, point: &impl CartesianPoint2d) -> bool
    where
        Self: Sized,
    {
        if !self.rect().contains_point(point) {
            return false;
        }

        match self.points() {
            [single] => single.equal(point),
            _ => self.iter_segments().any(|s| s.contains_point(point)),
        }
    }
}

/// Iterator of contour points.
#[derive(Debug, Clone)]
pub struct ContourPointsIterator<'a> {
    points: std::slice::Iter<'a, Point2d>,
    closing: Option<&'a Point2d>,
}

impl<'a> ContourPointsIterator<'a> {
    fn new(points: &'a [Point2d], is_closed: bool) -> Self {
        let closing = match (points.first(), points.last()) {
            (Some(first), Some(last)) if is_closed && first != last => Some(first),
            _ => None,
        };

        Self {
            points: points.iter(),
            closing,
        }
    }
}

impl<'a> Iterator for ContourPointsIterator<'a> {
    type Item = &'a Point2d;

    fn next(&mut self) -> Option<Self::Item> {
        self.points.next().or_else(|| self.closing.take())
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a> {
    points: ContourPointsIterator<'a>,
    prev: Option<&'a Point2d>,
}

impl<'a> ContourSegmentIterator<'a> {
    fn new(mut points: ContourPointsIterator<'a>) -> Self {
        let prev = points.next();
        Self { points, prev }
    }
}

impl<'a> Iterator for ContourSegmentIterator<'a> {
    type Item = Segment<'a, Point2d>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points.next()?;
        let prev = self.prev.replace(next)?;
        Some(Segment(prev, next))
    }
}

/// Open polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    points: Vec<Point2d>,
    rect: Rect,
}

impl Line {
    /// Creates a new line. An empty line has a zero rectangle at the origin.
    pub fn new(points: Vec<Point2d>) -> Self {
        let rect = Rect::from_points(points.iter()).unwrap_or_default();
        Self { points, rect }
    }

    /// Number of points in the line.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the line has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the point lies on the line.
    pub fn contains_point(&self, point: &impl CartesianPoint2d) -> bool {
        self.touches_point(point)
    }

    /// Returns true if the lines have at least one common point.
    pub fn intersects_line(&self, other: &Line) -> bool {
        if !self.rect.intersects(&other.rect) {
            return false;
        }

        match (self.points.as_slice(), other.points.as_slice()) {
            ([], _) | (_, []) => false,
            ([single], _) => other.contains_point(single),
            (_, [single]) => self.contains_point(single),
            _ => contours_intersect(self, other),
        }
    }

    /// Returns true if every point of `other` lies on `self`.
    ///
    /// Each segment of `other` must be covered without gaps by the collinear segments of `self`.
    pub fn contains_line(&self, other: &impl Contour) -> bool {
        if other.points().is_empty() || !self.rect.contains_rect(&other.rect()) {
            return false;
        }

        match other.points() {
            [single] => self.contains_point(single),
            _ => other.iter_segments().all(|s| self.covers_segment(&s)),
        }
    }

    fn covers_segment(&self, segment: &Segment<'_, Point2d>) -> bool {
        if segment.0 == segment.1 {
            return self.contains_point(segment.0);
        }

        let mut spans: Vec<(f64, f64)> = self
            .iter_segments()
            .filter(|own| segment.is_collinear(own))
            .map(|own| {
                let (a, b) = (segment.fraction(own.0), segment.fraction(own.1));
                (a.min(b), a.max(b))
            })
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut reach = 0.0f64;
        for (start, end) in spans {
            if start > reach {
                break;
            }
            reach = reach.max(end);
        }

        reach >= 1.0
    }

    /// Returns true if all the points are valid longitude/latitude pairs.
    pub fn valid_range(&self) -> bool {
        self.points.iter().all(Point2d::valid_range)
    }
}

impl Contour for Line {
    fn points(&self) -> &[Point2d] {
        &self.points
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

impl From<Vec<Point2d>> for Line {
    fn from(points: Vec<Point2d>) -> Self {
        Self::new(points)
    }
}

/// Closed contour, e.g. a boundary of a polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<Point2d>,
    rect: Rect,
}

impl Ring {
    /// Creates a new ring. The closing point may or may not be repeated at the end.
    pub fn new(points: Vec<Point2d>) -> Self {
        let rect = Rect::from_points(points.iter()).unwrap_or_default();
        Self { points, rect }
    }

    /// Number of stored points, including the repeated closing point if there is one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the last stored point repeats the first one.
    pub fn is_explicitly_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Signed area of the ring. Positive for counterclockwise rings.
    pub fn area_signed(&self) -> f64 {
        let mut iter = self.iter_points_closing();
        let Some(mut prev) = iter.next() else {
            return 0.0;
        };

        let mut aggr = 0.0;
        for p in iter {
            aggr += prev.x * p.y - p.x * prev.y;
            prev = p;
        }

        aggr / 2.0
    }

    /// Position of the point relative to the ring.
    ///
    /// Points on an edge are [`Location::Boundary`]. Otherwise the even-odd rule is applied to a ray
    /// cast in the +x direction; an edge counts as crossed when exactly one of its endpoints lies
    /// strictly above the ray, so a ray passing through a vertex is counted once.
    pub fn locate_point(&self, point: &impl CartesianPoint2d) -> Location {
        if !self.rect.contains_point(point) {
            return Location::Outside;
        }

        let (x, y) = (point.x(), point.y());
        let mut inside = false;
        for segment in self.iter_segments() {
            if segment.contains_point(point) {
                return Location::Boundary;
            }

            let Segment(a, b) = segment;
            if (a.y > y) != (b.y > y) {
                let x_cross = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
                if x < x_cross {
                    inside = !inside;
                }
            }
        }

        if inside {
            Location::Inside
        } else {
            Location::Outside
        }
    }

    /// Returns true if all the points are valid longitude/latitude pairs.
    pub fn valid_range(&self) -> bool {
        self.points.iter().all(Point2d::valid_range)
    }
}

impl Contour for Ring {
    fn points(&self) -> &[Point2d] {
        &self.points
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn rect(&self) -> Rect {
        self.rect
    }
}

impl From<Vec<Point2d>> for Ring {
    fn from(points: Vec<Point2d>) -> Self {
        Self::new(points)
    }
}

/// Returns true if any segment of `a` has a common point with any segment of `b`.
pub(crate) fn contours_intersect(a: &impl Contour, b: &impl Contour) -> bool {
    let b_rect = b.rect();
    a.iter_segments().any(|sa| {
        let ra = sa.rect();
        ra.intersects(&b_rect)
            && b.iter_segments()
                .any(|sb| ra.intersects(&sb.rect()) && sa.intersects(&sb))
    })
}

/// Returns true if any segment of `a` properly crosses any segment of `b`.
pub(crate) fn contours_cross(a: &impl Contour, b: &impl Contour) -> bool {
    let b_rect = b.rect();
    a.iter_segments().any(|sa| {
        let ra = sa.rect();
        ra.intersects(&b_rect)
            && b.iter_segments()
                .any(|sb| ra.intersects(&sb.rect()) && sa.crosses(&sb))
    })
}
