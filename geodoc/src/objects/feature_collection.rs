use geodoc_types::{Geom, Rect};

use crate::codec::{self, parse_document, Document, FromDocument};
use crate::collection::Collection;
use crate::error::ParseError;
use crate::extra::Extra;
use crate::object::{GeoObject, Object, ObjectKind};
use crate::options::ParseOptions;

const FEATURES: &str = "features";

/// List of features.
///
/// Children are not required to be features: any object found in the `features` array is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    features: Collection<Object>,
    extra: Option<Box<Extra>>,
}

impl FeatureCollection {
    /// Creates a collection without extra data.
    pub fn new(features: impl IntoIterator<Item = Object>) -> Self {
        let children = features.into_iter().collect();
        Self {
            features: Collection::new(children, &ParseOptions::default()),
            extra: None,
        }
    }

    /// Parses a `FeatureCollection` document.
    pub fn parse(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        codec::parse_as(input, options)
    }

    /// Children of the collection.
    pub fn features(&self) -> &Collection<Object> {
        &self.features
    }
}

impl GeoObject for FeatureCollection {
    fn kind(&self) -> ObjectKind {
        ObjectKind::FeatureCollection
    }

    fn rect(&self) -> Rect {
        self.features.rect()
    }

    fn extra(&self) -> Option<&Extra> {
        self.extra.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    fn valid(&self) -> bool {
        self.features.valid()
    }

    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        self.features.collect_geoms(out);
    }

    fn intersects_geom(&self, geom: &Geom) -> bool {
        self.features.intersects_geom(geom)
    }

    fn contains_geom(&self, geom: &Geom) -> bool {
        self.features.contains_geom(geom)
    }

    fn append_json(&self, dst: &mut String) {
        codec::append_type(dst, ObjectKind::FeatureCollection);
        dst.push_str(",\"features\":[");
        self.features
            .append_each(dst, |child, dst| child.append_json(dst));
        dst.push(']');
        codec::append_tail(dst, self.extra());
    }
}

impl FromDocument for FeatureCollection {
    const KIND: ObjectKind = ObjectKind::FeatureCollection;

    fn from_document(doc: &Document, options: &ParseOptions) -> Result<Self, ParseError> {
        let children = doc
            .payload_documents(FEATURES)?
            .iter()
            .map(|child| parse_document(child, options))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            features: Collection::new(children, options),
            extra: doc.extra_members(FEATURES),
        })
    }
}
