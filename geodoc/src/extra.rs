//! Data carried by an object beside its geometry.

use geodoc_types::Rect;

use crate::codec::Document;

/// Extra data of an object: coordinate dimensions beyond `x` and `y`, the bounding box override
/// and the document members the parser does not interpret.
///
/// Objects hold it as `Option<Box<Extra>>` and only allocate it when there is something to keep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extra {
    dims: Dims,
    values: Vec<f64>,
    bbox: Option<Rect>,
    members: Option<String>,
}

/// How many extra coordinates each vertex of an object carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dims {
    /// Every vertex has the same number of extra coordinates.
    Uniform(u8),
    /// The counts differ between vertices. Holds the start of every vertex's values.
    Mixed(Vec<usize>),
}

impl Default for Dims {
    fn default() -> Self {
        Self::Uniform(0)
    }
}

impl Dims {
    /// Layout for the given per-vertex counts in document order.
    pub fn from_counts(counts: &[u8]) -> Self {
        match counts.split_first() {
            None => Self::Uniform(0),
            Some((first, rest)) if rest.iter().all(|count| count == first) => {
                Self::Uniform(*first)
            }
            Some(_) => Self::Mixed(
                counts
                    .iter()
                    .scan(0, |start, &count| {
                        let vertex_start = *start;
                        *start += count as usize;
                        Some(vertex_start)
                    })
                    .collect(),
            ),
        }
    }

    /// Returns true if no vertex carries extra coordinates.
    pub fn is_empty(&self) -> bool {
        *self == Self::Uniform(0)
    }
}

impl Extra {
    /// Creates the envelope, or returns `None` if all the parts are empty.
    ///
    /// `values` are the extra coordinates of every vertex in document order, laid out as `dims`
    /// says. `members` is a compact JSON object holding the uninterpreted members.
    pub fn build(
        dims: Dims,
        values: Vec<f64>,
        bbox: Option<Rect>,
        members: Option<String>,
    ) -> Option<Box<Self>> {
        if dims.is_empty() && bbox.is_none() && members.is_none() {
            return None;
        }

        let values = if dims.is_empty() { Vec::new() } else { values };
        Some(Box::new(Self {
            dims,
            values,
            bbox,
            members,
        }))
    }

    /// Number of extra dimensions per vertex, or `None` if the vertices differ.
    pub fn dims(&self) -> Option<u8> {
        match &self.dims {
            Dims::Uniform(dims) => Some(*dims),
            Dims::Mixed(_) => None,
        }
    }

    /// Extra coordinates of all vertices, flattened.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Extra coordinates of the vertex with the given index.
    pub fn vertex_values(&self, index: usize) -> &[f64] {
        let range = match &self.dims {
            Dims::Uniform(dims) => {
                let dims = *dims as usize;
                index * dims..(index + 1) * dims
            }
            Dims::Mixed(starts) => {
                let Some(&start) = starts.get(index) else {
                    return &[];
                };
                start..starts.get(index + 1).copied().unwrap_or(self.values.len())
            }
        };

        self.values.get(range).unwrap_or_default()
    }

    /// Rectangle given by the `bbox` member, if it was a well-formed bbox.
    pub fn bbox(&self) -> Option<Rect> {
        self.bbox
    }

    /// Compact JSON object with the uninterpreted members in document order.
    pub fn members(&self) -> Option<&str> {
        self.members.as_deref()
    }

    /// Raw compact value of one of the uninterpreted members.
    pub fn member(&self, key: &str) -> Option<&str> {
        let members = self.members.as_deref()?;
        Document::scan(members).ok()?.get(key).map(|raw| raw.get())
    }

    /// Appends the members to an object that is being serialized, each prefixed with a comma.
    pub(crate) fn append_members(&self, dst: &mut String) {
        let Some(members) = &self.members else {
            return;
        };

        let inner = members
            .strip_prefix('{')
            .and_then(|m| m.strip_suffix('}'))
            .unwrap_or_default();
        if !inner.is_empty() {
            dst.push(',');
            dst.push_str(inner);
        }
    }
}

/// Extra coordinates of a vertex of an object that may have no envelope.
pub(crate) fn vertex_values(extra: Option<&Extra>, index: usize) -> &[f64] {
    extra.map(|e| e.vertex_values(index)).unwrap_or_default()
}
