//! Multi geometries: collections of leaves of one kind sharing a single `coordinates` array.

use geodoc_types::{Geom, Line, Point2d, Poly, Rect};

use crate::codec::{self, coords, Document, FromDocument};
use crate::collection::Collection;
use crate::error::ParseError;
use crate::extra::Extra;
use crate::object::{GeoObject, ObjectKind};
use crate::objects::{LineString, Point, Polygon, COORDINATES};
use crate::options::ParseOptions;

/// Reads every entry of the `coordinates` array with `read`.
fn read_children<T>(
    doc: &Document,
    read: impl Fn(&serde_json::Value) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    let value = doc.payload_value(COORDINATES)?;
    coords::as_array(&value)?.iter().map(read).collect()
}

macro_rules! impl_multi {
    ($name:ident, $kind:ident, $child:ident, $field:ident) => {
        impl GeoObject for $name {
            fn kind(&self) -> ObjectKind {
                ObjectKind::$kind
            }

            fn rect(&self) -> Rect {
                self.$field.rect()
            }

            fn extra(&self) -> Option<&Extra> {
                self.extra.as_deref()
            }

            fn is_empty(&self) -> bool {
                self.$field.is_empty()
            }

            fn valid(&self) -> bool {
                !self.$field.children().is_empty() && self.$field.valid()
            }

            fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
                self.$field.collect_geoms(out);
            }

            fn intersects_geom(&self, geom: &Geom) -> bool {
                self.$field.intersects_geom(geom)
            }

            fn contains_geom(&self, geom: &Geom) -> bool {
                self.$field.contains_geom(geom)
            }

            fn append_json(&self, dst: &mut String) {
                codec::append_type(dst, ObjectKind::$kind);
                dst.push_str(",\"coordinates\":[");
                self.$field
                    .append_each(dst, |child, dst| child.append_coordinates(dst));
                dst.push(']');
                codec::append_tail(dst, self.extra());
            }
        }

        impl $name {
            /// Parses a document of this kind.
            pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
                codec::parse_as(input, options)
            }

            #[doc = concat!("Children of the object as [`", stringify!($child), "`] objects.")]
            pub fn $field(&self) -> &Collection<$child> {
                &self.$field
            }
        }
    };
}

/// Set of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Collection<Point>,
    extra: Option<Box<Extra>>,
}

impl MultiPoint {
    /// Creates a multi point without extra data.
    pub fn new(points: impl IntoIterator<Item = Point2d>) -> Self {
        let children = points.into_iter().map(Point::new).collect();
        Self {
            points: Collection::new(children, &ParseOptions::default()),
            extra: None,
        }
    }
}

impl_multi!(MultiPoint, MultiPoint, Point, points);

impl FromDocument for MultiPoint {
    const KIND: ObjectKind = ObjectKind::MultiPoint;

    fn from_document(doc: &Document, options: &ParseOptions) -> Result<Self, ParseError> {
        let children = read_children(doc, |value| {
            let (point, extra) = coords::point(value)?.into_parts();
            Ok(Point::with_extra(point, extra))
        })?;

        Ok(Self {
            points: Collection::new(children, options),
            extra: doc.extra_members(COORDINATES),
        })
    }
}

/// Set of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    lines: Collection<LineString>,
    extra: Option<Box<Extra>>,
}

impl MultiLineString {
    /// Creates a multi line string without extra data.
    pub fn new(lines: impl IntoIterator<Item = Line>) -> Self {
        let children = lines.into_iter().map(LineString::new).collect();
        Self {
            lines: Collection::new(children, &ParseOptions::default()),
            extra: None,
        }
    }
}

impl_multi!(MultiLineString, MultiLineString, LineString, lines);

impl FromDocument for MultiLineString {
    const KIND: ObjectKind = ObjectKind::MultiLineString;

    fn from_document(doc: &Document, options: &ParseOptions) -> Result<Self, ParseError> {
        let children = read_children(doc, |value| {
            let (points, extra) = coords::line(value)?.into_parts();
            Ok(LineString::with_extra(Line::new(points), extra))
        })?;

        Ok(Self {
            lines: Collection::new(children, options),
            extra: doc.extra_members(COORDINATES),
        })
    }
}

/// Set of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Collection<Polygon>,
    extra: Option<Box<Extra>>,
}

impl MultiPolygon {
    /// Creates a multi polygon without extra data.
    pub fn new(polygons: impl IntoIterator<Item = Poly>) -> Self {
        let children = polygons.into_iter().map(Polygon::new).collect();
        Self {
            polygons: Collection::new(children, &ParseOptions::default()),
            extra: None,
        }
    }
}

impl_multi!(MultiPolygon, MultiPolygon, Polygon, polygons);

impl FromDocument for MultiPolygon {
    const KIND: ObjectKind = ObjectKind::MultiPolygon;

    fn from_document(doc: &Document, options: &ParseOptions) -> Result<Self, ParseError> {
        let children = read_children(doc, |value| {
            let (rings, extra) = coords::polygon(value)?.into_parts();
            Ok(Polygon::with_extra(Polygon::from_rings(rings)?, extra))
        })?;

        Ok(Self {
            polygons: Collection::new(children, options),
            extra: doc.extra_members(COORDINATES),
        })
    }
}
