//! Coordinate arrays: reading positions out of JSON values and writing them back.

use geodoc_types::Point2d;
use serde_json::Value;

use crate::error::ParseError;
use crate::extra::{vertex_values, Dims, Extra};

/// At most this many coordinates beyond `x` and `y` are kept for a position (`z` and `m`).
pub(crate) const MAX_EXTRA_DIMS: usize = 2;

/// Geometry of a leaf object together with the extra coordinates of its vertices.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Leaf<G> {
    pub geometry: G,
    pub dims: Dims,
    pub values: Vec<f64>,
}

impl<G> Leaf<G> {
    /// Splits the leaf into its geometry and an envelope holding the extra coordinates.
    pub fn into_parts(self) -> (G, Option<Box<Extra>>) {
        (
            self.geometry,
            Extra::build(self.dims, self.values, None, None),
        )
    }
}

/// Collects positions of one leaf geometry. Positions may differ in the number of extra
/// coordinates, each keeps its own.
#[derive(Debug, Default)]
struct Positions {
    counts: Vec<u8>,
    values: Vec<f64>,
}

impl Positions {
    fn read(&mut self, value: &Value) -> Result<Point2d, ParseError> {
        let entries = as_array(value)?;
        if entries.len() < 2 {
            return Err(ParseError::CoordinatesInvalid);
        }

        let mut numbers = entries
            .iter()
            .map(|v| v.as_f64().ok_or(ParseError::CoordinatesInvalid));
        let x = numbers.next().ok_or(ParseError::CoordinatesInvalid)??;
        let y = numbers.next().ok_or(ParseError::CoordinatesInvalid)??;

        let mut count = 0;
        for number in numbers {
            let number = number?;
            if count < MAX_EXTRA_DIMS {
                self.values.push(number);
                count += 1;
            }
        }

        // `count` is at most `MAX_EXTRA_DIMS`
        self.counts.push(count as u8);

        Ok(Point2d::new(x, y))
    }

    fn read_sequence(&mut self, value: &Value, min: usize) -> Result<Vec<Point2d>, ParseError> {
        let entries = as_array(value)?;
        if entries.len() < min {
            return Err(ParseError::CoordinatesInvalid);
        }

        entries.iter().map(|v| self.read(v)).collect()
    }

    fn finish<G>(self, geometry: G) -> Leaf<G> {
        Leaf {
            geometry,
            dims: Dims::from_counts(&self.counts),
            values: self.values,
        }
    }
}

/// Array entries of a coordinates value.
pub(crate) fn as_array(value: &Value) -> Result<&[Value], ParseError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ParseError::CoordinatesInvalid)
}

/// Reads a single position: at least two numbers.
pub(crate) fn point(value: &Value) -> Result<Leaf<Point2d>, ParseError> {
    let mut positions = Positions::default();
    let point = positions.read(value)?;
    Ok(positions.finish(point))
}

/// Reads a line: at least two positions.
pub(crate) fn line(value: &Value) -> Result<Leaf<Vec<Point2d>>, ParseError> {
    let mut positions = Positions::default();
    let points = positions.read_sequence(value, 2)?;
    Ok(positions.finish(points))
}

/// Reads polygon rings: at least one ring, each with at least three positions. The first ring is
/// the exterior one.
pub(crate) fn polygon(value: &Value) -> Result<Leaf<Vec<Vec<Point2d>>>, ParseError> {
    let rings = as_array(value)?;
    if rings.is_empty() {
        return Err(ParseError::CoordinatesInvalid);
    }

    let mut positions = Positions::default();
    let rings = rings
        .iter()
        .map(|ring| positions.read_sequence(ring, 3))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(positions.finish(rings))
}

/// Writes a number in the shortest form that reads back to the same value.
pub(crate) fn append_number(dst: &mut String, value: f64) {
    dst.push_str(&value.to_string());
}

/// Writes a position followed by its extra coordinates.
pub(crate) fn append_position(dst: &mut String, point: &Point2d, extra: &[f64]) {
    dst.push('[');
    append_number(dst, point.x);
    dst.push(',');
    append_number(dst, point.y);
    for value in extra {
        dst.push(',');
        append_number(dst, *value);
    }
    dst.push(']');
}

/// Writes an array of positions. `first_vertex` is the index of the first position among all
/// vertices of the object, used to look up its extra coordinates.
pub(crate) fn append_positions<'a>(
    dst: &mut String,
    points: impl IntoIterator<Item = &'a Point2d>,
    extra: Option<&Extra>,
    first_vertex: usize,
) -> usize {
    dst.push('[');
    let mut vertex = first_vertex;
    for (i, point) in points.into_iter().enumerate() {
        if i > 0 {
            dst.push(',');
        }
        append_position(dst, point, vertex_values(extra, vertex));
        vertex += 1;
    }
    dst.push(']');
    vertex
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn read_point() {
        let leaf = point(&json!([1, 2.5])).unwrap();
        assert_eq!(leaf.geometry, Point2d::new(1.0, 2.5));
        assert_eq!(leaf.dims, Dims::Uniform(0));

        let leaf = point(&json!([1, 2, 3, 4, 5])).unwrap();
        assert_eq!(leaf.dims, Dims::Uniform(2));
        assert_eq!(leaf.values, vec![3.0, 4.0]);

        assert_matches!(point(&json!([1])), Err(ParseError::CoordinatesInvalid));
        assert_matches!(point(&json!([1, null])), Err(ParseError::CoordinatesInvalid));
        assert_matches!(point(&json!([1, "a"])), Err(ParseError::CoordinatesInvalid));
        assert_matches!(point(&json!([1, 2, null])), Err(ParseError::CoordinatesInvalid));
        assert_matches!(point(&json!(null)), Err(ParseError::CoordinatesInvalid));
    }

    #[test]
    fn read_line() {
        let leaf = line(&json!([[1, 2, 3], [4, 5, 6]])).unwrap();
        assert_eq!(leaf.geometry.len(), 2);
        assert_eq!(leaf.dims, Dims::Uniform(1));
        assert_eq!(leaf.values, vec![3.0, 6.0]);

        let leaf = line(&json!([[1, 2], [3, 4, 5], [6, 7, 8, 9]])).unwrap();
        assert_eq!(leaf.dims, Dims::Mixed(vec![0, 0, 1]));
        assert_eq!(leaf.values, vec![5.0, 8.0, 9.0]);

        assert_matches!(line(&json!([[1, 2, 3]])), Err(ParseError::CoordinatesInvalid));
        assert_matches!(line(&json!([1, 2])), Err(ParseError::CoordinatesInvalid));
    }

    #[test]
    fn read_polygon() {
        let leaf = polygon(&json!([[[0, 0], [1, 0], [1, 1], [0, 0]]])).unwrap();
        assert_eq!(leaf.geometry.len(), 1);
        assert_eq!(leaf.geometry[0].len(), 4);

        assert_matches!(polygon(&json!([])), Err(ParseError::CoordinatesInvalid));
        assert_matches!(
            polygon(&json!([[[0, 0], [10, 0], [5, 10], [0, 0]], [[1, 1]]])),
            Err(ParseError::CoordinatesInvalid)
        );
    }

    #[test]
    fn write_positions() {
        let mut dst = String::new();
        append_position(&mut dst, &Point2d::new(10.0, -0.5), &[3.0]);
        assert_eq!(dst, "[10,-0.5,3]");

        let extra = Extra::build(Dims::Uniform(1), vec![7.0, 8.0, 9.0], None, None).unwrap();
        let points = [Point2d::new(1.0, 2.0), Point2d::new(3.0, 4.0)];
        let mut dst = String::new();
        let next = append_positions(&mut dst, &points, Some(&*extra), 1);
        assert_eq!(dst, "[[1,2,8],[3,4,9]]");
        assert_eq!(next, 3);
    }

    #[test]
    fn write_mixed_positions() {
        let leaf = line(&json!([[1, 2], [3, 4, 5]])).unwrap();
        let (points, extra) = leaf.into_parts();
        let mut dst = String::new();
        append_positions(&mut dst, &points, extra.as_deref(), 0);
        assert_eq!(dst, "[[1,2],[3,4,5]]");
    }
}
