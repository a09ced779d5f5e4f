use geodoc_types::{Geom, Point2d, Rect};

use crate::codec::{self, parse_document, Document, FromDocument};
use crate::error::ParseError;
use crate::extra::Extra;
use crate::object::{GeoObject, Object, ObjectKind};
use crate::options::ParseOptions;

const GEOMETRY: &str = "geometry";
const PROPERTIES: &str = "properties";

/// Object with a geometry and properties.
///
/// The geometry can be any object, or `null` for a feature with no location. Such a feature is
/// empty and takes no part in spatial predicates. `properties`, `id` and all the other members are
/// kept as raw JSON and are not interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    geometry: Option<Box<Object>>,
    extra: Option<Box<Extra>>,
}

impl Feature {
    /// Creates a feature with no properties.
    pub fn new(geometry: impl Into<Object>) -> Self {
        Self {
            geometry: Some(Box::new(geometry.into())),
            extra: None,
        }
    }

    /// Creates a feature with a `null` geometry and no properties.
    pub fn without_geometry() -> Self {
        Self {
            geometry: None,
            extra: None,
        }
    }

    /// Parses a `Feature` document.
    pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        codec::parse_as(input, options)
    }

    /// Geometry of the feature, `None` if it is `null`.
    pub fn geometry(&self) -> Option<&Object> {
        self.geometry.as_deref()
    }

    /// Raw compact value of the `properties` member.
    pub fn properties(&self) -> Option<&str> {
        self.extra.as_ref()?.member(PROPERTIES)
    }

    /// Raw compact value of the `id` member.
    pub fn id(&self) -> Option<&str> {
        self.extra.as_ref()?.member("id")
    }
}

impl GeoObject for Feature {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Feature
    }

    fn rect(&self) -> Rect {
        self.geometry().map(GeoObject::rect).unwrap_or_default()
    }

    fn extra(&self) -> Option<&Extra> {
        self.extra.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.geometry().is_none_or(GeoObject::is_empty)
    }

    fn valid(&self) -> bool {
        self.geometry().is_none_or(GeoObject::valid)
    }

    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        if let Some(geometry) = self.geometry() {
            geometry.collect_geoms(out);
        }
    }

    fn intersects_geom(&self, geom: &Geom) -> bool {
        self.geometry()
            .is_some_and(|geometry| geometry.intersects_geom(geom))
    }

    fn contains_geom(&self, geom: &Geom) -> bool {
        self.geometry()
            .is_some_and(|geometry| geometry.contains_geom(geom))
    }

    fn append_json(&self, dst: &mut String) {
        codec::append_type(dst, ObjectKind::Feature);
        dst.push_str(",\"geometry\":");
        match self.geometry() {
            Some(geometry) => geometry.append_json(dst),
            None => dst.push_str("null"),
        }
        if let Some(extra) = self.extra() {
            extra.append_members(dst);
        }
        if self.properties().is_none() {
            dst.push_str(",\"properties\":{}");
        }
        dst.push('}');
    }

    fn bounding_rect(&self) -> Rect {
        match self.extra().and_then(Extra::bbox) {
            Some(bbox) => bbox,
            None => self
                .geometry()
                .map(GeoObject::bounding_rect)
                .unwrap_or_default(),
        }
    }

    fn centroid(&self) -> Point2d {
        match self.extra().and_then(Extra::bbox) {
            Some(bbox) => bbox.center(),
            None => self
                .geometry()
                .map(GeoObject::centroid)
                .unwrap_or_default(),
        }
    }
}

impl FromDocument for Feature {
    const KIND: ObjectKind = ObjectKind::Feature;

    fn from_document(doc: &Document, options: &ParseOptions) -> Result<Self, ParseError> {
        let raw = doc.payload(GEOMETRY)?;
        let geometry = if raw.get().trim() == "null" {
            None
        } else {
            let geometry = Document::from_raw(raw)?;
            Some(Box::new(parse_document(&geometry, options)?))
        };

        Ok(Self {
            geometry,
            extra: doc.extra_members(GEOMETRY),
        })
    }
}
