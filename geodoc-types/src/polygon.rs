use crate::contour::{contours_cross, contours_intersect, Contour, Line, Ring};
use crate::point::{CartesianPoint2d, Point2d};
use crate::rect::Rect;
use crate::segment::Segment;
use serde::{Deserialize, Serialize};

/// Position of a point relative to an area.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Strictly inside.
    Inside,
    /// On one of the edges.
    Boundary,
    /// Outside, including inside of a hole.
    Outside,
}

/// Polygon geometry. Polygon consists of one exterior ring and zero or more holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Poly {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Poly {
    /// Creates a new polygon.
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    /// Exterior ring.
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    /// Holes of the polygon.
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Bounding rectangle, which is the rectangle of the exterior ring.
    pub fn rect(&self) -> Rect {
        self.exterior.rect()
    }

    /// Returns true if the exterior ring has no points.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Iterates over all the rings starting with the exterior one.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ Ring> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    /// Iterates over all segments of all the rings.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Point2d>> {
        self.iter_rings().flat_map(Ring::iter_segments)
    }

    /// Position of the point relative to the polygon. A point inside a hole is outside of the
    /// polygon, a point on the edge of a hole is on its boundary.
    pub fn locate_point(&self, point: &impl CartesianPoint2d) -> Location {
        match self.exterior.locate_point(point) {
            Location::Inside => {}
            other => return other,
        }

        for hole in &self.holes {
            match hole.locate_point(point) {
                Location::Inside => return Location::Outside,
                Location::Boundary => return Location::Boundary,
                Location::Outside => {}
            }
        }

        Location::Inside
    }

    /// Returns true if the point lies inside or on the boundary of the polygon.
    pub fn contains_point(&self, point: &impl CartesianPoint2d) -> bool {
        self.locate_point(point) != Location::Outside
    }

    /// Returns true if the line has at least one common point with the polygon.
    pub fn intersects_line(&self, line: &Line) -> bool {
        if !self.rect().intersects(&line.rect()) {
            return false;
        }

        if line.len() > 1 && self.iter_rings().any(|ring| contours_intersect(ring, line)) {
            return true;
        }

        line.points().first().is_some_and(|p| self.contains_point(p))
    }

    /// Returns true if the whole line lies inside or on the boundary of the polygon.
    pub fn contains_line(&self, line: &Line) -> bool {
        self.contains_contour(line)
    }

    /// Returns true if the polygons have at least one common point.
    pub fn intersects_poly(&self, other: &Poly) -> bool {
        if !self.rect().intersects(&other.rect()) {
            return false;
        }

        let edges_touch = self
            .iter_rings()
            .any(|a| other.iter_rings().any(|b| contours_intersect(a, b)));
        if edges_touch {
            return true;
        }

        // No common edge points: either one polygon lies inside the other, or they are disjoint.
        other
            .exterior
            .points()
            .first()
            .is_some_and(|p| self.contains_point(p))
            || self
                .exterior
                .points()
                .first()
                .is_some_and(|p| other.contains_point(p))
    }

    /// Returns true if `other` lies inside or on the boundary of the polygon.
    ///
    /// The exterior of `other` must be inside `self` without crossing any of its edges, and no hole
    /// of `self` may lie inside `other`.
    pub fn contains_poly(&self, other: &Poly) -> bool {
        if !self.contains_contour(&other.exterior) {
            return false;
        }

        !self.holes.iter().any(|hole| {
            hole.points()
                .iter()
                .any(|p| other.locate_point(p) == Location::Inside)
        })
    }

    fn contains_contour(&self, contour: &impl Contour) -> bool {
        if contour.points().is_empty() || !self.rect().contains_rect(&contour.rect()) {
            return false;
        }

        contour.points().iter().all(|p| self.contains_point(p))
            && !self.iter_rings().any(|ring| contours_cross(ring, contour))
            && contour.iter_segments().all(|s| self.contains_segment(&s))
    }

    /// Splits the segment at every polygon vertex lying on it and checks the middle of each piece.
    ///
    /// Expects that no edge of the polygon crosses the segment.
    fn contains_segment(&self, segment: &Segment<'_, Point2d>) -> bool {
        let rect = segment.rect();
        let mut cuts = vec![0.0, 1.0];
        for edge in self.iter_segments() {
            if !rect.intersects(&edge.rect()) {
                continue;
            }

            for vertex in [edge.0, edge.1] {
                if segment.contains_point(vertex) {
                    cuts.push(segment.fraction(vertex));
                }
            }
        }

        cuts.sort_by(f64::total_cmp);
        cuts.windows(2).all(|pair| {
            pair[0] == pair[1] || self.contains_point(&segment.point_at((pair[0] + pair[1]) / 2.0))
        })
    }

    /// Checks the shape rules of a GeoJSON polygon: every ring has at least 4 points and repeats its
    /// first point at the end, and every hole lies inside the exterior ring.
    pub fn is_valid_shape(&self) -> bool {
        self.iter_rings()
            .all(|ring| ring.len() >= 4 && ring.is_explicitly_closed())
            && self.holes.iter().all(|hole| {
                hole.points()
                    .iter()
                    .all(|p| self.exterior.locate_point(p) != Location::Outside)
            })
    }

    /// Returns true if all the points are valid longitude/latitude pairs.
    pub fn valid_range(&self) -> bool {
        self.iter_rings().all(Ring::valid_range)
    }
}

impl From<Rect> for Poly {
    fn from(rect: Rect) -> Self {
        Self::new(Ring::new(rect.ring_points().to_vec()), vec![])
    }
}

impl From<Ring> for Poly {
    fn from(exterior: Ring) -> Self {
        Self::new(exterior, vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        Ring::new(coords.iter().map(|&(x, y)| Point2d::new(x, y)).collect())
    }

    fn line(coords: &[(f64, f64)]) -> Line {
        Line::new(coords.iter().map(|&(x, y)| Point2d::new(x, y)).collect())
    }

    fn square(min: f64, max: f64) -> Ring {
        ring(&[(min, min), (max, min), (max, max), (min, max), (min, min)])
    }

    fn donut() -> Poly {
        Poly::new(square(0.0, 10.0), vec![square(2.0, 8.0)])
    }

    #[test]
    fn contains_point() {
        let polygon = Poly::from(ring(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0)]));

        assert!(polygon.contains_point(&Point2d::new(0.0, 0.0)));
        assert!(polygon.contains_point(&Point2d::new(1.0, 1.0)));
        assert!(polygon.contains_point(&Point2d::new(0.5, 0.0)));
        assert!(polygon.contains_point(&Point2d::new(0.2, 0.1)));
        assert!(!polygon.contains_point(&Point2d::new(0.2, 0.3)));
        assert!(!polygon.contains_point(&Point2d::new(0.2, -0.3)));
        assert!(!polygon.contains_point(&Point2d::new(1.1, 0.0)));
    }

    #[test]
    fn locate_point_with_hole() {
        let poly = donut();
        assert_eq!(poly.locate_point(&Point2d::new(1.0, 1.0)), Location::Inside);
        assert_eq!(poly.locate_point(&Point2d::new(5.0, 5.0)), Location::Outside);
        assert_eq!(poly.locate_point(&Point2d::new(2.0, 5.0)), Location::Boundary);
        assert_eq!(poly.locate_point(&Point2d::new(10.0, 5.0)), Location::Boundary);
        assert_eq!(poly.locate_point(&Point2d::new(15.0, 5.0)), Location::Outside);
    }

    #[test]
    fn intersects_line() {
        let poly = donut();
        assert!(poly.intersects_line(&line(&[(-5.0, 5.0), (5.0, 5.0)])));
        assert!(poly.intersects_line(&line(&[(1.0, 1.0), (1.5, 1.5)])));
        // inside the hole
        assert!(!poly.intersects_line(&line(&[(3.0, 3.0), (7.0, 7.0)])));
        // touches the hole edge
        assert!(poly.intersects_line(&line(&[(3.0, 3.0), (8.0, 3.0)])));
        assert!(!poly.intersects_line(&line(&[(11.0, 0.0), (11.0, 10.0)])));
    }

    #[test]
    fn contains_line() {
        let poly = donut();
        assert!(poly.contains_line(&line(&[(1.0, 1.0), (1.0, 9.0), (9.0, 9.0)])));
        assert!(poly.contains_line(&line(&[(0.0, 0.0), (10.0, 0.0)])));
        // crosses the hole
        assert!(!poly.contains_line(&line(&[(1.0, 5.0), (9.0, 5.0)])));
        // leaves the polygon
        assert!(!poly.contains_line(&line(&[(1.0, 1.0), (11.0, 1.0)])));
    }

    #[test]
    fn contains_line_concave() {
        // U shape: both ends inside, but the segment passes through the notch
        let poly = Poly::from(ring(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (7.0, 10.0),
            (7.0, 3.0),
            (3.0, 3.0),
            (3.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]));
        assert!(!poly.contains_line(&line(&[(1.0, 8.0), (9.0, 8.0)])));
        assert!(poly.contains_line(&line(&[(1.0, 2.0), (9.0, 2.0)])));
        assert!(poly.contains_line(&line(&[(1.0, 3.0), (9.0, 3.0)])));
    }

    #[test]
    fn contains_line_through_slot() {
        // the slot walls have vertices on y = 5, so the line touches them without crossing
        let poly = Poly::from(ring(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (3.0, 10.0),
            (3.0, 5.0),
            (3.0, 2.0),
            (2.0, 2.0),
            (2.0, 5.0),
            (2.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]));
        assert!(!poly.contains_line(&line(&[(0.0, 5.0), (10.0, 5.0)])));
        assert!(poly.contains_line(&line(&[(3.0, 5.0), (10.0, 5.0)])));
        assert!(poly.contains_line(&line(&[(0.0, 1.0), (10.0, 1.0)])));
        assert!(!poly.contains_poly(&Poly::from(ring(&[
            (0.0, 5.0),
            (10.0, 5.0),
            (10.0, 0.0),
            (0.0, 0.0),
            (0.0, 5.0),
        ]))));
    }

    #[test]
    fn intersects_poly() {
        let poly = donut();
        assert!(poly.intersects_poly(&Poly::from(square(-5.0, 1.0))));
        assert!(poly.intersects_poly(&Poly::from(square(-5.0, 15.0))));
        assert!(Poly::from(square(-5.0, 15.0)).intersects_poly(&poly));
        assert!(poly.intersects_poly(&Poly::from(square(0.5, 1.5))));
        assert!(!poly.intersects_poly(&Poly::from(square(3.0, 7.0))));
        assert!(!Poly::from(square(3.0, 7.0)).intersects_poly(&poly));
        assert!(!poly.intersects_poly(&Poly::from(square(11.0, 12.0))));
    }

    #[test]
    fn contains_poly() {
        let poly = donut();
        assert!(poly.contains_poly(&Poly::from(square(0.5, 1.5))));
        assert!(!poly.contains_poly(&Poly::from(square(3.0, 7.0))));
        // covers the hole without crossing any edge
        assert!(!poly.contains_poly(&Poly::from(square(1.0, 9.0))));
        assert!(poly.contains_poly(&poly));
        assert!(!poly.contains_poly(&Poly::from(square(-1.0, 5.0))));

        let solid = Poly::from(square(0.0, 10.0));
        assert!(solid.contains_poly(&poly));
        assert!(solid.contains_poly(&Poly::from(square(1.0, 9.0))));
    }

    #[test]
    fn valid_shape() {
        assert!(donut().is_valid_shape());
        // open ring
        assert!(!Poly::from(ring(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0), (1.0, 1.0)])).is_valid_shape());
        // too few points
        assert!(!Poly::from(ring(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)])).is_valid_shape());
        // hole outside of the exterior
        assert!(!Poly::new(square(0.0, 10.0), vec![square(20.0, 30.0)]).is_valid_shape());
    }
}
