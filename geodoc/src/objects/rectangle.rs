use geodoc_types::{Geom, Rect};

use crate::codec::{self, coords};
use crate::extra::Extra;
use crate::object::{GeoObject, ObjectKind};

/// Axis-aligned rectangle.
///
/// Rectangles are only created in code, usually as query areas. They are written to documents as
/// a closed `Polygon`, and parsing that document back gives a [`Polygon`](crate::objects::Polygon).
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    rect: Rect,
    extra: Option<Box<Extra>>,
}

impl Rectangle {
    /// Creates a rectangle.
    pub fn new(rect: Rect) -> Self {
        Self { rect, extra: None }
    }
}

impl GeoObject for Rectangle {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Rectangle
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn extra(&self) -> Option<&Extra> {
        self.extra.as_deref()
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn valid(&self) -> bool {
        self.rect.min.valid_range() && self.rect.max.valid_range()
    }

    fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        out.push(Geom::Rect(self.rect));
    }

    fn intersects_geom(&self, geom: &Geom) -> bool {
        Geom::Rect(self.rect).intersects(geom)
    }

    fn contains_geom(&self, geom: &Geom) -> bool {
        Geom::Rect(self.rect).contains(geom)
    }

    fn append_json(&self, dst: &mut String) {
        codec::append_type(dst, ObjectKind::Rectangle);
        dst.push_str(",\"coordinates\":[");
        coords::append_positions(dst, &self.rect.ring_points(), self.extra(), 0);
        dst.push(']');
        codec::append_tail(dst, self.extra());
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;
    use crate::objects::{LineString, Point};
    use crate::options::ParseOptions;
    use geodoc_types::Point2d;

    #[test]
    fn serialize_as_polygon() {
        let rect = Rectangle::new(Rect::from_coords(1.0, 2.0, 3.5, 4.0));
        let json = rect.to_json();
        assert_eq!(
            json,
            r#"{"type":"Polygon","coordinates":[[[1,2],[3.5,2],[3.5,4],[1,4],[1,2]]]}"#
        );

        let strict = ParseOptions::default().with_require_valid(true);
        let parsed = Object::parse(&json, &strict).unwrap();
        assert_eq!(parsed.kind(), ObjectKind::Polygon);
        assert_eq!(parsed.rect(), rect.rect());
        assert_eq!(rect.kind(), ObjectKind::Rectangle);
    }

    #[test]
    fn predicates() {
        let rect = Rectangle::new(Rect::from_coords(0.0, 0.0, 10.0, 10.0));
        assert!(rect.contains(&Point::new(Point2d::new(10.0, 10.0))));
        assert!(!rect.contains(&Point::new(Point2d::new(10.0, 10.5))));

        let line =
            LineString::new(vec![Point2d::new(5.0, 5.0), Point2d::new(15.0, 5.0)].into());
        assert!(rect.intersects(&line));
        assert!(!rect.contains(&line));
        assert!(line.intersects(&rect));

        let inner = Rectangle::from(Rect::from_coords(2.0, 2.0, 3.0, 3.0));
        assert!(inner.within(&rect));
        assert!(!rect.within(&inner));
        assert_eq!(rect.centroid(), Point2d::new(5.0, 5.0));
    }

    #[test]
    fn validity() {
        assert!(Rectangle::new(Rect::from_coords(-180.0, -90.0, 180.0, 90.0)).valid());
        assert!(!Rectangle::new(Rect::from_coords(-180.0, -90.0, 181.0, 90.0)).valid());
    }
}
