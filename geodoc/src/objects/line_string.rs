use geodoc_types::{Contour, Geom, Line, Rect};

use crate::codec::{self, coords, Document, FromDocument};
use crate::error::ParseError;
use crate::extra::Extra;
use crate::object::{GeoObject, ObjectKind};
use crate::objects::COORDINATES;
use crate::options::ParseOptions;

/// Open polyline of two or more positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    line: Line,
    extra: Option<Box<Extra>>,
}

impl LineString {
    /// Creates a line string without extra data.
    pub fn new(line: Line) -> Self {
        Self { line, extra: None }
    }

    pub(crate) fn with_extra(line: Line, extra: Option<Box<Extra>>) -> Self {
        Self { line, extra }
    }

    /// Parses a `LineString` document.
    pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        codec::parse_as(input, options)
    }

    /// Geometry of the line string.
    pub fn line(&self) -> &Line {
        &self.line
    }

    pub(crate) fn append_coordinates(&self, dst: &mut String) {
        coords::append_positions(dst, self.line.points(), self.extra(), 0);
    }
}

impl GeoObject for LineString {
    fn kind(&self) -> ObjectKind {
        ObjectKind::LineString
    }

    fn rect(&self) -> Rect {
        self.line.rect()
    }

    fn extra(&self) -> Option<&Extra> {
        self.extra.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    fn valid(&self) -> bool {
        self.line.len() >= 2 && self.line.valid_range()
    }

    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        out.push(Geom::Line(&self.line));
    }

    fn intersects_geom(&self, geom: &Geom) -> bool {
        Geom::Line(&self.line).intersects(geom)
    }

    fn contains_geom(&self, geom: &Geom) -> bool {
        Geom::Line(&self.line).contains(geom)
    }

    fn append_json(&self, dst: &mut String) {
        codec::append_type(dst, ObjectKind::LineString);
        dst.push_str(",\"coordinates\":");
        self.append_coordinates(dst);
        codec::append_tail(dst, self.extra());
    }
}

impl FromDocument for LineString {
    const KIND: ObjectKind = ObjectKind::LineString;

    fn from_document(doc: &Document, _options: &ParseOptions) -> Result<Self, ParseError> {
        let leaf = coords::line(&doc.payload_value(COORDINATES)?)?;
        Ok(Self::with_extra(
            Line::new(leaf.geometry),
            doc.extra(COORDINATES, leaf.dims, leaf.values),
        ))
    }
}
