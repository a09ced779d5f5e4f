//! Test helpers shared by the modules of the crate, and tests of the public entry points.

use approx::assert_abs_diff_eq;
use geodoc_types::{Point2d, Rect};
use serde::{Deserialize, Serialize};

use crate::codec::compact_into;
use crate::{GeoObject, Object, ObjectKind, ParseError, ParseOptions, Point, Rectangle};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a document with default options.
pub(crate) fn parse(input: &str) -> Object {
    init_logger();
    Object::parse(input, &ParseOptions::default()).unwrap()
}

/// Parses a document and checks that it is written back unchanged except for whitespace.
pub(crate) fn assert_round_trip(input: &str) -> Object {
    let object = parse(input);
    let mut expected = String::new();
    compact_into(&mut expected, input);
    assert_eq!(object.to_json(), expected);
    object
}

/// Checks that parsing with default options fails with `err`.
pub(crate) fn assert_parse_error(input: &str, err: ParseError) {
    init_logger();
    assert_eq!(Object::parse(input, &ParseOptions::default()), Err(err));
}

#[test]
fn entry_points_agree() {
    let input = r#"{"type":"LineString","coordinates":[[1,2],[3,4]],"id":"l"}"#;
    let a = crate::parse(input, &ParseOptions::default()).unwrap();
    let b: Object = input.parse().unwrap();
    let c = Object::parse(input, &ParseOptions::default()).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.kind(), ObjectKind::LineString);
    assert_eq!(a.to_string(), input);
    assert_eq!(a.members(), Some(r#"{"id":"l"}"#));
}

#[test]
fn errors() {
    assert_parse_error("", ParseError::DataInvalid);
    assert_parse_error("{", ParseError::DataInvalid);
    assert_parse_error(r#"{"type":"Point","coordinates":[1,2]"#, ParseError::DataInvalid);
    assert_parse_error("[]", ParseError::TypeMissing);
    assert_parse_error("{}", ParseError::TypeMissing);
    assert_parse_error(r#"{"type":null}"#, ParseError::TypeInvalid);
    assert_parse_error(r#"{"type":"point","coordinates":[1,2]}"#, ParseError::TypeInvalid);
    assert_parse_error(
        r#"{"type":"Rectangle","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#,
        ParseError::TypeInvalid,
    );

    assert_eq!(ParseError::CoordinatesMissing.to_string(), "coordinates are missing");
}

#[test]
fn repeated_members_last_wins() {
    let object = parse(
        r#"{"type":"Point","coordinates":[1,2],"type":"LineString","coordinates":[[1,2],[3,4]]}"#,
    );
    assert_eq!(object.kind(), ObjectKind::LineString);
}

#[test]
fn snapshots() {
    let object = parse(
        r#"{
            "type": "Feature",
            "id": 12,
            "geometry": {
                "type": "MultiPoint",
                "coordinates": [[1.50, 2, 7], [3, 4, 8]]
            },
            "bbox": [1, 2, 3, 4],
            "properties": {"name": "two pins", "tags": ["a", "b"]}
        }"#,
    );
    insta::assert_snapshot!(object.to_json(), @r#"{"type":"Feature","geometry":{"type":"MultiPoint","coordinates":[[1.5,2,7],[3,4,8]]},"id":12,"bbox":[1,2,3,4],"properties":{"name":"two pins","tags":["a","b"]}}"#);

    let rectangle = Rectangle::new(Rect::from_coords(-1.0, -2.0, 1.0, 2.0));
    insta::assert_snapshot!(rectangle.to_json(), @r#"{"type":"Polygon","coordinates":[[[-1,-2],[1,-2],[1,2],[-1,2],[-1,-2]]]}"#);
}

#[test]
fn centroids() {
    let object = parse(
        r#"{"type":"Polygon","coordinates":[[[0,0],[3,0],[3,1],[0,1],[0,0]],[[1,0.25],[2,0.25],[2,0.75],[1,0.25]]]}"#,
    );
    assert_abs_diff_eq!(object.centroid(), Point2d::new(1.5, 0.5));

    let object = parse(r#"{"type":"MultiPoint","coordinates":[[0.1,0.2],[0.3,0.4]]}"#);
    assert_abs_diff_eq!(object.centroid(), Point2d::new(0.2, 0.3), epsilon = 1e-12);
}

#[test]
fn mixed_kinds() {
    let collection = parse(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]]]},"properties":{}},
            {"type":"Feature","geometry":{"type":"MultiLineString","coordinates":[[[20,0],[30,10]],[[40,0],[50,10]]]},"properties":{}}
        ]}"#,
    );
    let points = parse(r#"{"type":"MultiPoint","coordinates":[[5,5],[25,5],[45,5]]}"#);
    let line = parse(r#"{"type":"LineString","coordinates":[[1,1],[9,9]]}"#);
    let collection_of_both = parse(
        r#"{"type":"GeometryCollection","geometries":[
            {"type":"Point","coordinates":[5,5]},
            {"type":"LineString","coordinates":[[1,1],[9,9]]}
        ]}"#,
    );

    assert!(collection.contains(&points));
    assert!(points.within(&collection));
    assert!(collection.contains(&line));
    assert!(collection.contains(&collection_of_both));
    assert!(collection_of_both.intersects(&collection));
    assert!(!collection_of_both.contains(&collection));

    let far = Point::new(Point2d::new(35.0, 5.0));
    assert!(!collection.intersects(&far));

    let empty = parse(r#"{"type":"GeometryCollection","geometries":[]}"#);
    assert!(!collection.contains(&empty));
    assert!(!collection.intersects(&empty));
    assert!(!empty.intersects(&collection));
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Layer {
    name: String,
    #[serde(default)]
    options: ParseOptions,
    shapes: Vec<Object>,
}

#[test]
fn serde_interop() {
    let input = r#"{"name":"pins","shapes":[{"type":"Point","coordinates":[1,2],"title":"a"},{"type":"Point","coordinates":[3,4,5]}]}"#;
    let layer: Layer = serde_json::from_str(input).unwrap();
    assert_eq!(layer.options, ParseOptions::default());
    assert_eq!(layer.shapes.len(), 2);
    assert_eq!(layer.shapes[1].to_json(), r#"{"type":"Point","coordinates":[3,4,5]}"#);

    let written = serde_json::to_string(&layer).unwrap();
    assert_eq!(
        written,
        r#"{"name":"pins","options":{"require_valid":false,"index_children":64},"shapes":[{"type":"Point","coordinates":[1,2],"title":"a"},{"type":"Point","coordinates":[3,4,5]}]}"#
    );
    let back: Layer = serde_json::from_str(&written).unwrap();
    assert_eq!(back, layer);

    let err = serde_json::from_str::<Layer>(r#"{"name":"x","shapes":[{"type":"Point"}]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("coordinates are missing"));
}

#[test]
fn objects_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Object>();

    let object = parse(r#"{"type":"MultiPoint","coordinates":[[1,2],[3,4]]}"#);
    let copy = object.clone();
    let handle = std::thread::spawn(move || copy.to_json());
    assert_eq!(handle.join().unwrap(), object.to_json());
}

#[test]
fn queries_are_repeatable() {
    let object = parse(
        r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[4,0],[4,4],[0,0]]],[[[10,10],[14,10],[14,14],[10,10]]]]}"#,
    );
    let rect = object.bounding_rect();
    let valid = object.valid();
    for _ in 0..3 {
        assert_eq!(object.bounding_rect(), rect);
        assert_eq!(object.valid(), valid);
    }
    assert_eq!(rect, Rect::from_coords(0.0, 0.0, 14.0, 14.0));
    assert!(valid);
}
