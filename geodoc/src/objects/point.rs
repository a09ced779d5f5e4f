use geodoc_types::{Geom, Point2d, Rect};

use crate::codec::{self, coords, Document, FromDocument};
use crate::error::ParseError;
use crate::extra::{vertex_values, Extra};
use crate::object::{GeoObject, ObjectKind};
use crate::objects::COORDINATES;
use crate::options::ParseOptions;

/// Single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    point: Point2d,
    extra: Option<Box<Extra>>,
}

impl Point {
    /// Creates a point without extra data.
    pub fn new(point: Point2d) -> Self {
        Self { point, extra: None }
    }

    pub(crate) fn with_extra(point: Point2d, extra: Option<Box<Extra>>) -> Self {
        Self { point, extra }
    }

    /// Parses a `Point` document.
    pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        codec::parse_as(input, options)
    }

    /// Position of the point.
    pub fn point(&self) -> Point2d {
        self.point
    }

    /// Writes the `coordinates` value.
    pub(crate) fn append_coordinates(&self, dst: &mut String) {
        coords::append_position(dst, &self.point, vertex_values(self.extra(), 0));
    }
}

impl GeoObject for Point {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Point
    }

    fn rect(&self) -> Rect {
        Rect::from_point(&self.point)
    }

    fn extra(&self) -> Option<&Extra> {
        self.extra.as_deref()
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn valid(&self) -> bool {
        self.point.valid_range()
    }

    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        out.push(Geom::Point(self.point));
    }

    fn intersects_geom(&self, geom: &Geom) -> bool {
        Geom::Point(self.point).intersects(geom)
    }

    fn contains_geom(&self, geom: &Geom) -> bool {
        Geom::Point(self.point).contains(geom)
    }

    fn append_json(&self, dst: &mut String) {
        codec::append_type(dst, ObjectKind::Point);
        dst.push_str(",\"coordinates\":");
        self.append_coordinates(dst);
        codec::append_tail(dst, self.extra());
    }

    fn centroid(&self) -> Point2d {
        self.point
    }
}

impl FromDocument for Point {
    const KIND: ObjectKind = ObjectKind::Point;

    fn from_document(doc: &Document, _options: &ParseOptions) -> Result<Self, ParseError> {
        let leaf = coords::point(&doc.payload_value(COORDINATES)?)?;
        Ok(Self::with_extra(
            leaf.geometry,
            doc.extra(COORDINATES, leaf.dims, leaf.values),
        ))
    }
}
