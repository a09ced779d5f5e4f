use geodoc_types::{Geom, Rect};

use crate::codec::{self, parse_document, Document, FromDocument};
use crate::collection::Collection;
use crate::error::ParseError;
use crate::extra::Extra;
use crate::object::{GeoObject, Object, ObjectKind};
use crate::options::ParseOptions;

const GEOMETRIES: &str = "geometries";

/// Heterogeneous list of objects.
///
/// Any object is accepted as a child, including features and other collections.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geometries: Collection<Object>,
    extra: Option<Box<Extra>>,
}

impl GeometryCollection {
    /// Creates a collection without extra data.
    pub fn new(geometries: impl IntoIterator<Item = Object>) -> Self {
        let children = geometries.into_iter().collect();
        Self {
            geometries: Collection::new(children, &ParseOptions::default()),
            extra: None,
        }
    }

    /// Parses a `GeometryCollection` document.
    pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        codec::parse_as(input, options)
    }

    /// Children of the collection.
    pub fn geometries(&self) -> &Collection<Object> {
        &self.geometries
    }
}

impl GeoObject for GeometryCollection {
    fn kind(&self) -> ObjectKind {
        ObjectKind::GeometryCollection
    }

    fn rect(&self) -> Rect {
        self.geometries.rect()
    }

    fn extra(&self) -> Option<&Extra> {
        self.extra.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    fn valid(&self) -> bool {
        self.geometries.valid()
    }

    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        self.geometries.collect_geoms(out);
    }

    fn intersects_geom(&self, geom: &Geom) -> bool {
        self.geometries.intersects_geom(geom)
    }

    fn contains_geom(&self, geom: &Geom) -> bool {
        self.geometries.contains_geom(geom)
    }

    fn append_json(&self, dst: &mut String) {
        codec::append_type(dst, ObjectKind::GeometryCollection);
        dst.push_str(",\"geometries\":[");
        self.geometries
            .append_each(dst, |child, dst| child.append_json(dst));
        dst.push(']');
        codec::append_tail(dst, self.extra());
    }
}

impl FromDocument for GeometryCollection {
    const KIND: ObjectKind = ObjectKind::GeometryCollection;

    fn from_document(doc: &Document, options: &ParseOptions) -> Result<Self, ParseError> {
        let children = doc
            .payload_documents(GEOMETRIES)?
            .iter()
            .map(|child| parse_document(child, options))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            geometries: Collection::new(children, options),
            extra: doc.extra_members(GEOMETRIES),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{LineString, Point};
    use crate::tests::{assert_parse_error, assert_round_trip, parse};
    use assert_matches::assert_matches;
    use geodoc_types::Point2d;

    const MIXED: &str = r#"{"type":"GeometryCollection","geometries":[
        {"type":"Point","coordinates":[1,2,3],"id":1},
        {"type":"LineString","coordinates":[[10,10],[20,20]]},
        {"type":"Polygon","coordinates":[[[30,30],[40,30],[40,40],[30,30]]]}
    ],"bbox":null}"#;

    #[test]
    fn parse_documents() {
        let collection = assert_round_trip(MIXED);
        assert_eq!(collection.rect(), Rect::from_coords(1.0, 2.0, 40.0, 40.0));
        assert_eq!(collection.centroid(), Point2d::new(20.5, 21.0));

        assert_round_trip(r#"{"type":"GeometryCollection","geometries":[]}"#);
        assert_round_trip(
            r#"{"type":"GeometryCollection","geometries":[{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]}]}]}"#,
        );

        assert_parse_error(r#"{"type":"GeometryCollection"}"#, ParseError::CoordinatesMissing);
        assert_parse_error(
            r#"{"type":"GeometryCollection","geometries":{}}"#,
            ParseError::CoordinatesInvalid,
        );
        assert_parse_error(
            r#"{"type":"GeometryCollection","geometries":[1]}"#,
            ParseError::TypeMissing,
        );
        // first failing child decides the error
        assert_parse_error(
            r#"{"type":"GeometryCollection","geometries":[
                {"type":"Point","coordinates":[1]},
                {"type":"Unknown"}
            ]}"#,
            ParseError::CoordinatesInvalid,
        );
    }

    #[test]
    fn validity() {
        let empty = parse(r#"{"type":"GeometryCollection","geometries":[]}"#);
        assert!(empty.valid());
        assert!(empty.is_empty());

        let strict = ParseOptions::default().with_require_valid(true);
        assert!(GeometryCollection::parse(MIXED, &strict).is_ok());
        assert_matches!(
            GeometryCollection::parse(
                r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,100]}]}"#,
                &strict
            ),
            Err(ParseError::CoordinatesInvalid)
        );
    }

    #[test]
    fn predicates() {
        let collection = parse(MIXED);
        let point = |x, y| Point::new(Point2d::new(x, y));

        assert!(collection.contains(&point(1.0, 2.0)));
        assert!(collection.contains(&point(15.0, 15.0)));
        assert!(collection.contains(&point(35.0, 32.0)));
        assert!(!collection.intersects(&point(25.0, 25.0)));

        let across =
            LineString::new(vec![Point2d::new(15.0, 15.0), Point2d::new(35.0, 32.0)].into());
        assert!(collection.intersects(&across));
        assert!(!collection.contains(&across));

        let built = GeometryCollection::new([
            Object::from(point(1.0, 2.0)),
            Object::from(point(3.0, 4.0)),
        ]);
        assert_eq!(
            built.to_json(),
            r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]},{"type":"Point","coordinates":[3,4]}]}"#
        );
        assert!(!built.within(&collection));
        assert!(built.intersects(&collection));
    }
}
