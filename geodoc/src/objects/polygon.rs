use geodoc_types::{Contour, Geom, Point2d, Poly, Rect, Ring};

use crate::codec::{self, coords, Document, FromDocument};
use crate::error::ParseError;
use crate::extra::Extra;
use crate::object::{GeoObject, ObjectKind};
use crate::objects::COORDINATES;
use crate::options::ParseOptions;

/// Polygon with an exterior ring and optional holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    poly: Poly,
    extra: Option<Box<Extra>>,
}

impl Polygon {
    /// Creates a polygon without extra data.
    pub fn new(poly: Poly) -> Self {
        Self { poly, extra: None }
    }

    pub(crate) fn with_extra(poly: Poly, extra: Option<Box<Extra>>) -> Self {
        Self { poly, extra }
    }

    /// Parses a `Polygon` document.
    pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        codec::parse_as(input, options)
    }

    /// Geometry of the polygon.
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub(crate) fn append_coordinates(&self, dst: &mut String) {
        dst.push('[');
        let mut vertex = 0;
        for (i, ring) in self.poly.iter_rings().enumerate() {
            if i > 0 {
                dst.push(',');
            }
            vertex = coords::append_positions(dst, ring.points(), self.extra(), vertex);
        }
        dst.push(']');
    }

    pub(crate) fn from_rings(rings: Vec<Vec<Point2d>>) -> Result<Poly, ParseError> {
        let mut rings = rings.into_iter().map(Ring::new);
        let exterior = rings.next().ok_or(ParseError::CoordinatesInvalid)?;
        Ok(Poly::new(exterior, rings.collect()))
    }
}

impl GeoObject for Polygon {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Polygon
    }

    fn rect(&self) -> Rect {
        self.poly.rect()
    }

    fn extra(&self) -> Option<&Extra> {
        self.extra.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.poly.is_empty()
    }

    fn valid(&self) -> bool {
        self.poly.is_valid_shape() && self.poly.valid_range()
    }

    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        out.push(Geom::Poly(&self.poly));
    }

    fn intersects_geom(&self, geom: &Geom) -> bool {
        Geom::Poly(&self.poly).intersects(geom)
    }

    fn contains_geom(&self, geom: &Geom) -> bool {
        Geom::Poly(&self.poly).contains(geom)
    }

    fn append_json(&self, dst: &mut String) {
        codec::append_type(dst, ObjectKind::Polygon);
        dst.push_str(",\"coordinates\":");
        self.append_coordinates(dst);
        codec::append_tail(dst, self.extra());
    }
}

impl FromDocument for Polygon {
    const KIND: ObjectKind = ObjectKind::Polygon;

    fn from_document(doc: &Document, _options: &ParseOptions) -> Result<Self, ParseError> {
        let leaf = coords::polygon(&doc.payload_value(COORDINATES)?)?;
        Ok(Self::with_extra(
            Self::from_rings(leaf.geometry)?,
            doc.extra(COORDINATES, leaf.dims, leaf.values),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{LineString, Point};
    use crate::tests::{assert_parse_error, assert_round_trip, parse};
    use assert_matches::assert_matches;

    const DONUT: &str = r#"{"type":"Polygon","coordinates":[
        [[0,0],[10,0],[10,10],[0,10],[0,0]],
        [[2,2],[8,2],[8,8],[2,8],[2,2]]
    ]}"#;

    #[test]
    fn parse_documents() {
        assert_round_trip(DONUT);
        assert_round_trip(
            r#"{"type":"Polygon","coordinates":[[[0,0,1],[10,0,2],[5,10,3],[0,0,1]],[[4,4,5],[6,4,6],[5,5,7],[4,4,5]]]}"#,
        );
        // 3D exterior with a 2D hole
        assert_round_trip(
            r#"{"type":"Polygon","coordinates":[[[0,0,1],[10,0,1],[10,10,1],[0,10,1],[0,0,1]],[[2,2],[8,2],[8,8],[2,8],[2,2]]]}"#,
        );
        // unclosed ring is accepted unless validity is required
        assert_round_trip(r#"{"type":"Polygon","coordinates":[[[0,0],[10,0],[5,10]]]}"#);

        assert_parse_error(
            r#"{"type":"Polygon","coordinates":[]}"#,
            ParseError::CoordinatesInvalid,
        );
        assert_parse_error(
            r#"{"type":"Polygon","coordinates":[[[0,0],[10,0],[5,10],[0,0]],[[1,1]]]}"#,
            ParseError::CoordinatesInvalid,
        );
        assert_parse_error(
            r#"{"type":"Polygon","coordinates":[[0,0],[10,0],[5,10],[0,0]]}"#,
            ParseError::CoordinatesInvalid,
        );
    }

    #[test]
    fn strict_validity() {
        let strict = ParseOptions::default().with_require_valid(true);
        assert!(Polygon::parse(DONUT, &strict).is_ok());
        assert_matches!(
            Polygon::parse(
                r#"{"type":"Polygon","coordinates":[[[0,0],[10,0],[5,10]]]}"#,
                &strict
            ),
            Err(ParseError::CoordinatesInvalid)
        );
        assert_matches!(
            Polygon::parse(
                r#"{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]],[[20,20],[30,20],[30,30],[20,20]]]}"#,
                &strict
            ),
            Err(ParseError::CoordinatesInvalid)
        );
        assert_matches!(
            Polygon::parse(
                r#"{"type":"Polygon","coordinates":[[[0,0],[200,0],[200,10],[0,0]]]}"#,
                &strict
            ),
            Err(ParseError::CoordinatesInvalid)
        );
    }

    #[test]
    fn predicates_with_hole() {
        let donut = parse(DONUT);
        let point = |x, y| Point::new(Point2d::new(x, y));

        assert!(donut.contains(&point(1.0, 1.0)));
        assert!(donut.contains(&point(10.0, 5.0)));
        assert!(donut.contains(&point(2.0, 5.0)));
        assert!(!donut.contains(&point(5.0, 5.0)));
        assert!(!donut.intersects(&point(5.0, 5.0)));

        let inside_hole = parse(r#"{"type":"LineString","coordinates":[[3,3],[7,7]]}"#);
        assert!(!donut.intersects(&inside_hole));

        let across_hole =
            LineString::new(vec![Point2d::new(1.0, 5.0), Point2d::new(9.0, 5.0)].into());
        assert!(donut.intersects(&across_hole));
        assert!(!donut.contains(&across_hole));

        let island = parse(r#"{"type":"Polygon","coordinates":[[[3,3],[7,3],[7,7],[3,7],[3,3]]]}"#);
        assert!(!donut.intersects(&island));
        assert!(!island.intersects(&donut));
        assert!(!island.within(&donut));

        assert_eq!(donut.centroid(), Point2d::new(5.0, 5.0));
    }
}
