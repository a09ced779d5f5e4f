use std::fmt::{Display, Formatter};
use std::str::FromStr;

use geodoc_types::{Geom, Point2d, Rect};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::codec;
use crate::error::ParseError;
use crate::extra::Extra;
use crate::objects::{
    Feature, FeatureCollection, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Rectangle,
};
use crate::options::ParseOptions;

/// Kind of an [`Object`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Single position.
    Point,
    /// Open polyline.
    LineString,
    /// Polygon with optional holes.
    Polygon,
    /// Set of points.
    MultiPoint,
    /// Set of line strings.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
    /// Heterogeneous list of objects.
    GeometryCollection,
    /// Object with a geometry and properties.
    Feature,
    /// List of features.
    FeatureCollection,
    /// Axis-aligned rectangle. Written to documents as a `Polygon`.
    Rectangle,
}

impl ObjectKind {
    /// Value of the `type` member written for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ObjectKind::Point => "Point",
            ObjectKind::LineString => "LineString",
            ObjectKind::Polygon | ObjectKind::Rectangle => "Polygon",
            ObjectKind::MultiPoint => "MultiPoint",
            ObjectKind::MultiLineString => "MultiLineString",
            ObjectKind::MultiPolygon => "MultiPolygon",
            ObjectKind::GeometryCollection => "GeometryCollection",
            ObjectKind::Feature => "Feature",
            ObjectKind::FeatureCollection => "FeatureCollection",
        }
    }

    /// Kind named by a `type` member. `Rectangle` is never returned.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let kind = match name {
            "Point" => ObjectKind::Point,
            "LineString" => ObjectKind::LineString,
            "Polygon" => ObjectKind::Polygon,
            "MultiPoint" => ObjectKind::MultiPoint,
            "MultiLineString" => ObjectKind::MultiLineString,
            "MultiPolygon" => ObjectKind::MultiPolygon,
            "GeometryCollection" => ObjectKind::GeometryCollection,
            "Feature" => ObjectKind::Feature,
            "FeatureCollection" => ObjectKind::FeatureCollection,
            _ => return None,
        };

        Some(kind)
    }

    /// Returns true for the kinds that hold a list of child objects.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            ObjectKind::MultiPoint
                | ObjectKind::MultiLineString
                | ObjectKind::MultiPolygon
                | ObjectKind::GeometryCollection
                | ObjectKind::FeatureCollection
        )
    }
}

/// Capabilities shared by all objects.
///
/// Spatial predicates work on the kernel primitives an object decomposes into (see
/// [`GeoObject::geoms`]): `a.intersects(b)` is true if any primitive of `b` intersects `a`, and
/// `a.contains(b)` is true if every primitive of `b` is contained by `a`. Collections check each
/// primitive only against the children whose rectangles it touches.
pub trait GeoObject {
    /// Kind of the object.
    fn kind(&self) -> ObjectKind;

    /// Rectangle of the geometry itself, not affected by the `bbox` member.
    fn rect(&self) -> Rect;

    /// Extra data of the object.
    fn extra(&self) -> Option<&Extra>;

    /// Returns true if the object has no coordinates.
    fn is_empty(&self) -> bool;

    /// Returns true if all the coordinates are in the longitude/latitude range and the geometry
    /// satisfies the GeoJSON shape rules.
    fn valid(&self) -> bool;

    /// Appends the kernel primitives of the object to `out`.
    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>);

    /// Returns true if the primitive has a common point with the object.
    fn intersects_geom(&self, geom: &Geom) -> bool;

    /// Returns true if the primitive lies inside or on the boundary of the object.
    fn contains_geom(&self, geom: &Geom) -> bool;

    /// Appends compact JSON representation of the object to `dst`.
    fn append_json(&self, dst: &mut String);

    /// Bounding rectangle: the `bbox` member if the document had a well-formed one, otherwise the
    /// rectangle of the geometry.
    fn bounding_rect(&self) -> Rect {
        self.extra()
            .and_then(Extra::bbox)
            .unwrap_or_else(|| self.rect())
    }

    /// Representative point of the object: the center of its bounding rectangle.
    fn centroid(&self) -> Point2d {
        self.bounding_rect().center()
    }

    /// Uninterpreted members of the document as a compact JSON object.
    fn members(&self) -> Option<&str> {
        self.extra().and_then(Extra::members)
    }

    /// Kernel primitives of the object.
    fn geoms(&self) -> Vec<Geom<'_>> {
        let mut geoms = vec![];
        self.collect_geoms(&mut geoms);
        geoms
    }

    /// Compact JSON representation of the object.
    fn to_json(&self) -> String {
        let mut dst = String::new();
        self.append_json(&mut dst);
        dst
    }

    /// Returns true if the objects have at least one common point.
    fn intersects(&self, other: &impl GeoObject) -> bool
    where
        Self: Sized,
    {
        other.geoms().iter().any(|geom| self.intersects_geom(geom))
    }

    /// Returns true if `other` lies inside or on the boundary of the object.
    fn contains(&self, other: &impl GeoObject) -> bool
    where
        Self: Sized,
    {
        let geoms = other.geoms();
        !geoms.is_empty() && geoms.iter().all(|geom| self.contains_geom(geom))
    }

    /// Returns true if the object lies inside or on the boundary of `other`.
    fn within(&self, other: &impl GeoObject) -> bool
    where
        Self: Sized,
    {
        other.contains(self)
    }
}

/// Any GeoJSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Point.
    Point(Point),
    /// Line string.
    LineString(LineString),
    /// Polygon.
    Polygon(Polygon),
    /// Multi point.
    MultiPoint(MultiPoint),
    /// Multi line string.
    MultiLineString(MultiLineString),
    /// Multi polygon.
    MultiPolygon(MultiPolygon),
    /// Geometry collection.
    GeometryCollection(GeometryCollection),
    /// Feature.
    Feature(Feature),
    /// Feature collection.
    FeatureCollection(FeatureCollection),
    /// Rectangle.
    Rectangle(Rectangle),
}

impl Object {
    /// Parses a document of any kind.
    pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        codec::parse(input, options)
    }

    fn inner(&self) -> &dyn GeoObject {
        match self {
            Object::Point(v) => v,
            Object::LineString(v) => v,
            Object::Polygon(v) => v,
            Object::MultiPoint(v) => v,
            Object::MultiLineString(v) => v,
            Object::MultiPolygon(v) => v,
            Object::GeometryCollection(v) => v,
            Object::Feature(v) => v,
            Object::FeatureCollection(v) => v,
            Object::Rectangle(v) => v,
        }
    }
}

impl GeoObject for Object {
    fn kind(&self) -> ObjectKind {
        self.inner().kind()
    }

    fn rect(&self) -> Rect {
        self.inner().rect()
    }

    fn extra(&self) -> Option<&Extra> {
        self.inner().extra()
    }

    fn is_empty(&self) -> bool {
        self.inner().is_empty()
    }

    fn valid(&self) -> bool {
        self.inner().valid()
    }

    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        self.inner().collect_geoms(out)
    }

    fn intersects_geom(&self, geom: &Geom) -> bool {
        self.inner().intersects_geom(geom)
    }

    fn contains_geom(&self, geom: &Geom) -> bool {
        self.inner().contains_geom(geom)
    }

    fn append_json(&self, dst: &mut String) {
        self.inner().append_json(dst)
    }

    fn bounding_rect(&self) -> Rect {
        self.inner().bounding_rect()
    }

    fn centroid(&self) -> Point2d {
        self.inner().centroid()
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Object {
                fn from(value: $variant) -> Self {
                    Object::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
    Rectangle
);

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl FromStr for Object {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ParseOptions::default())
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw =
            RawValue::from_string(self.to_json()).map_err(<S::Error as ser::Error>::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::parse(raw.get(), &ParseOptions::default())
            .map_err(<D::Error as de::Error>::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        for kind in [
            ObjectKind::Point,
            ObjectKind::MultiPolygon,
            ObjectKind::GeometryCollection,
            ObjectKind::FeatureCollection,
        ] {
            assert_eq!(ObjectKind::from_type_name(kind.type_name()), Some(kind));
        }

        assert_eq!(ObjectKind::Rectangle.type_name(), "Polygon");
        assert_eq!(ObjectKind::from_type_name("Rectangle"), None);
        assert!(ObjectKind::MultiPoint.is_collection());
        assert!(!ObjectKind::Feature.is_collection());
    }

    #[test]
    fn delegation() {
        let rect = Rect::from_coords(0.0, 0.0, 2.0, 4.0);
        let object = Object::from(Rectangle::new(rect));
        assert_eq!(object.kind(), ObjectKind::Rectangle);
        assert_eq!(object.bounding_rect(), rect);
        assert_eq!(object.centroid(), Point2d::new(1.0, 2.0));
        assert_eq!(object.geoms(), vec![Geom::Rect(rect)]);
        assert_eq!(object.members(), None);
        assert_eq!(format!("{object}"), object.to_json());

        let point = Object::from(Point::new(Point2d::new(1.0, 1.0)));
        assert!(object.contains(&point));
        assert!(point.within(&object));
        assert!(!point.contains(&object));
    }
}
