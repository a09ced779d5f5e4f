use geodoc_types::{Geom, Rect};

use crate::index::ChildIndex;
use crate::object::GeoObject;
use crate::options::ParseOptions;

/// List of child objects with a spatial index over their rectangles.
///
/// Used by all the variants that hold children. The index is built once in [`Collection::new`]
/// from the geometry rectangles of the children (a `bbox` member of a child is not used).
#[derive(Debug, Clone)]
pub struct Collection<T> {
    children: Vec<T>,
    rect: Rect,
    index: ChildIndex,
}

impl<T: GeoObject> Collection<T> {
    /// Creates a new collection and builds its index.
    pub fn new(children: Vec<T>, options: &ParseOptions) -> Self {
        let rects = children.iter().map(GeoObject::rect).collect();
        let rect = Rect::merge_all(
            children
                .iter()
                .filter(|child| !child.is_empty())
                .map(GeoObject::rect),
        )
        .unwrap_or_default();
        let index = ChildIndex::build(rects, options.index_children);

        Self {
            children,
            rect,
            index,
        }
    }

    /// Children in document order.
    pub fn children(&self) -> &[T] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if none of the children has coordinates.
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(GeoObject::is_empty)
    }

    /// Union of the rectangles of all non-empty children.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Index over the children rectangles.
    pub fn index(&self) -> &ChildIndex {
        &self.index
    }

    /// Children whose rectangle intersects `rect`, in document order.
    pub fn search(&self, rect: &Rect) -> impl Iterator<Item = &'_ T> {
        self.index
            .search(rect)
            .into_iter()
            .filter_map(|i| self.children.get(i))
    }

    /// Returns true if every child is valid.
    pub fn valid(&self) -> bool {
        self.children.iter().all(GeoObject::valid)
    }

    /// Appends kernel primitives of all the children.
    pub fn collect_geoms<'a>(&'a self, out: &mut Vec<Geom<'a>>) {
        for child in &self.children {
            child.collect_geoms(out);
        }
    }

    /// Returns true if any child intersects the primitive.
    pub fn intersects_geom(&self, geom: &Geom) -> bool {
        self.index.any(&geom.bounding_rect(), |i| {
            self.children
                .get(i)
                .is_some_and(|child| child.intersects_geom(geom))
        })
    }

    /// Returns true if any child contains the whole primitive.
    pub fn contains_geom(&self, geom: &Geom) -> bool {
        self.index.any(&geom.bounding_rect(), |i| {
            self.children
                .get(i)
                .is_some_and(|child| child.contains_geom(geom))
        })
    }

    /// Writes the children separated by commas with `write`.
    pub(crate) fn append_each(&self, dst: &mut String, mut write: impl FnMut(&T, &mut String)) {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                dst.push(',');
            }
            write(child, dst);
        }
    }
}

impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}
