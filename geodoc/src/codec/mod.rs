//! Reading and writing GeoJSON documents.
//!
//! A document is first checked to be valid JSON and its top-level members are collected in
//! document order as raw slices. The members a variant interprets (`type` and its payload key)
//! are turned into the object, every other member is compacted and kept in the object's
//! [`Extra`](crate::extra::Extra) envelope to be written back unchanged.

mod compact;
pub(crate) mod coords;

use std::fmt;

use geodoc_types::Rect;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::error::ParseError;
use crate::extra::{Dims, Extra};
use crate::object::{GeoObject, Object, ObjectKind};
use crate::objects::{
    Feature, FeatureCollection, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::options::ParseOptions;

use compact::member_keys;
pub(crate) use compact::compact_into;

/// Top-level members of a document in document order.
#[derive(Debug)]
pub(crate) struct Document<'a> {
    members: Vec<Member<'a>>,
}

#[derive(Debug)]
struct Member<'a> {
    /// Decoded key, used for lookups.
    key: String,
    /// Key literal as written, used when the member is written back.
    raw_key: &'a str,
    value: &'a RawValue,
}

impl<'a> Document<'a> {
    /// Checks that the input is valid JSON and collects its top-level members. A document that is
    /// not a JSON object has no members.
    pub fn scan(input: &'a str) -> Result<Self, ParseError> {
        let raw: &'a RawValue =
            serde_json::from_str(input).map_err(|_| ParseError::DataInvalid)?;
        Self::from_raw(raw)
    }

    /// Collects members of an already validated value.
    pub fn from_raw(raw: &'a RawValue) -> Result<Self, ParseError> {
        if !raw.get().trim_start().starts_with('{') {
            return Ok(Self { members: vec![] });
        }

        let MemberList(values) =
            serde_json::from_str(raw.get()).map_err(|_| ParseError::DataInvalid)?;
        let raw_keys = member_keys(raw.get());
        if raw_keys.len() != values.len() {
            return Err(ParseError::DataInvalid);
        }

        let members = raw_keys
            .into_iter()
            .zip(values)
            .map(|(raw_key, (key, value))| Member {
                key,
                raw_key,
                value,
            })
            .collect();
        Ok(Self { members })
    }

    /// Raw value of the member. If the key is repeated, the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&'a RawValue> {
        self.members
            .iter()
            .rev()
            .find(|member| member.key == key)
            .map(|member| member.value)
    }

    /// Kind named by the `type` member.
    pub fn kind(&self) -> Result<ObjectKind, ParseError> {
        let raw = self.get("type").ok_or(ParseError::TypeMissing)?;
        let name: String =
            serde_json::from_str(raw.get()).map_err(|_| ParseError::TypeInvalid)?;
        ObjectKind::from_type_name(&name).ok_or(ParseError::TypeInvalid)
    }

    /// Raw value of the payload member.
    pub fn payload(&self, key: &str) -> Result<&'a RawValue, ParseError> {
        self.get(key).ok_or(ParseError::CoordinatesMissing)
    }

    /// Payload member read as a JSON tree, for coordinate arrays.
    pub fn payload_value(&self, key: &str) -> Result<Value, ParseError> {
        serde_json::from_str(self.payload(key)?.get()).map_err(|_| ParseError::CoordinatesInvalid)
    }

    /// Payload member that must be an array of objects, each of which is scanned.
    pub fn payload_documents(&self, key: &str) -> Result<Vec<Document<'a>>, ParseError> {
        let items: Vec<&'a RawValue> = serde_json::from_str(self.payload(key)?.get())
            .map_err(|_| ParseError::CoordinatesInvalid)?;
        items.into_iter().map(Document::from_raw).collect()
    }

    /// Rectangle of the `bbox` member, if it is an array of `2 * N` numbers with `N >= 2`.
    pub fn bbox(&self) -> Option<Rect> {
        let values: Vec<f64> = serde_json::from_str(self.get("bbox")?.get()).ok()?;
        Rect::from_bbox(&values).ok()
    }

    /// Compact JSON object with every member except `type` and the payload member.
    pub fn other_members(&self, payload_key: &str) -> Option<String> {
        let mut fragment = String::new();
        for member in &self.members {
            if member.key == "type" || member.key == payload_key {
                continue;
            }

            fragment.push(if fragment.is_empty() { '{' } else { ',' });
            fragment.push_str(member.raw_key);
            fragment.push(':');
            compact_into(&mut fragment, member.value.get());
        }

        if fragment.is_empty() {
            return None;
        }

        fragment.push('}');
        Some(fragment)
    }

    /// Envelope of an object parsed from this document.
    pub fn extra(&self, payload_key: &str, dims: Dims, values: Vec<f64>) -> Option<Box<Extra>> {
        Extra::build(dims, values, self.bbox(), self.other_members(payload_key))
    }

    /// Envelope of an object that has no extra coordinates to keep.
    pub fn extra_members(&self, payload_key: &str) -> Option<Box<Extra>> {
        self.extra(payload_key, Dims::default(), Vec::new())
    }
}

struct MemberList<'a>(Vec<(String, &'a RawValue)>);

impl<'de> Deserialize<'de> for MemberList<'de> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = MemberList<'de>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut members = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, &'de RawValue>()? {
                    members.push((key, value));
                }

                Ok(MemberList(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

/// Object variant that is built from a scanned document.
pub(crate) trait FromDocument: Sized {
    /// Kind the `type` member must name.
    const KIND: ObjectKind;

    /// Builds the object. The `type` member is already checked.
    fn from_document(doc: &Document, options: &ParseOptions) -> Result<Self, ParseError>;
}

/// Builds an object of any kind from a scanned document.
pub(crate) fn parse_document(doc: &Document, options: &ParseOptions) -> Result<Object, ParseError> {
    let object = match doc.kind()? {
        ObjectKind::Point => Point::from_document(doc, options)?.into(),
        ObjectKind::LineString => LineString::from_document(doc, options)?.into(),
        ObjectKind::Polygon => Polygon::from_document(doc, options)?.into(),
        ObjectKind::MultiPoint => MultiPoint::from_document(doc, options)?.into(),
        ObjectKind::MultiLineString => MultiLineString::from_document(doc, options)?.into(),
        ObjectKind::MultiPolygon => MultiPolygon::from_document(doc, options)?.into(),
        ObjectKind::GeometryCollection => GeometryCollection::from_document(doc, options)?.into(),
        ObjectKind::Feature => Feature::from_document(doc, options)?.into(),
        ObjectKind::FeatureCollection => FeatureCollection::from_document(doc, options)?.into(),
        // never named by a `type` member
        ObjectKind::Rectangle => return Err(ParseError::TypeInvalid),
    };

    Ok(object)
}

/// Parses a document of any kind.
pub(crate) fn parse(input: &str, options: &ParseOptions) -> Result<Object, ParseError> {
    let result = Document::scan(input)
        .and_then(|doc| parse_document(&doc, options))
        .and_then(|object| check_valid(object, options));

    if let Err(err) = &result {
        log::debug!("Document rejected: {err}");
    }

    result
}

/// Parses a document that must be of the kind `T`.
pub(crate) fn parse_as<T: FromDocument + GeoObject>(
    input: &str,
    options: &ParseOptions,
) -> Result<T, ParseError> {
    let result = Document::scan(input)
        .and_then(|doc| {
            if doc.kind()? != T::KIND {
                return Err(ParseError::TypeInvalid);
            }

            T::from_document(&doc, options)
        })
        .and_then(|object| check_valid(object, options));

    if let Err(err) = &result {
        log::debug!("{:?} document rejected: {err}", T::KIND);
    }

    result
}

fn check_valid<T: GeoObject>(object: T, options: &ParseOptions) -> Result<T, ParseError> {
    if options.require_valid && !object.valid() {
        return Err(ParseError::CoordinatesInvalid);
    }

    Ok(object)
}

/// Writes `{"type":"<name>"` that starts every serialized object.
pub(crate) fn append_type(dst: &mut String, kind: ObjectKind) {
    dst.push_str("{\"type\":\"");
    dst.push_str(kind.type_name());
    dst.push('"');
}

/// Writes the members kept in the envelope and closes the object.
pub(crate) fn append_tail(dst: &mut String, extra: Option<&Extra>) {
    if let Some(extra) = extra {
        extra.append_members(dst);
    }
    dst.push('}');
}
