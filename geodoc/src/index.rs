//! Spatial index over the children of a collection.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use geodoc_types::Rect;
use rstar::primitives::{GeomWithData, Rectangle as TreeRect};
use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};

type TreeItem = GeomWithData<TreeRect<[f64; 2]>, usize>;

/// Index of children rectangles.
///
/// Answers "which children have a rectangle intersecting the given one". Large collections keep
/// the rectangles in an R-tree, small ones are scanned linearly. The tree is never modified after
/// it is built, so clones share it.
#[derive(Clone, Default)]
pub struct ChildIndex {
    rects: Vec<Rect>,
    tree: Option<Arc<RTree<TreeItem>>>,
}

impl ChildIndex {
    /// Builds the index. The R-tree is only built if there are at least `threshold` rectangles.
    pub fn build(rects: Vec<Rect>, threshold: usize) -> Self {
        let tree = (rects.len() >= threshold && !rects.is_empty()).then(|| {
            log::trace!("Building child index for {} rectangles", rects.len());
            let items = rects
                .iter()
                .enumerate()
                .map(|(i, rect)| TreeItem::new(TreeRect::from_aabb(to_aabb(rect)), i))
                .collect();
            Arc::new(RTree::bulk_load(items))
        });

        Self { rects, tree }
    }

    /// Returns true if there are no rectangles in the index.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns true if the R-tree was built for the index.
    pub fn is_tree(&self) -> bool {
        self.tree.is_some()
    }

    /// Calls `f` with the index of every child whose rectangle intersects `target`, until `f`
    /// returns true. Returns true if `f` did.
    pub fn any(&self, target: &Rect, mut f: impl FnMut(usize) -> bool) -> bool {
        match &self.tree {
            Some(tree) => tree
                .locate_with_selection_function(Intersecting(to_aabb(target)))
                .any(|item| f(item.data)),
            None => self
                .rects
                .iter()
                .enumerate()
                .any(|(i, rect)| rect.intersects(target) && f(i)),
        }
    }

    /// Indices of all children whose rectangle intersects `target`, in ascending order.
    pub fn search(&self, target: &Rect) -> Vec<usize> {
        let mut found = vec![];
        self.any(target, |i| {
            found.push(i);
            false
        });
        found.sort_unstable();
        found
    }
}

impl Debug for ChildIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChildIndex")
            .field("len", &self.rects.len())
            .field("tree", &self.tree.is_some())
            .finish()
    }
}

fn to_aabb(rect: &Rect) -> AABB<[f64; 2]> {
    AABB::from_corners([rect.min.x, rect.min.y], [rect.max.x, rect.max.y])
}

struct Intersecting(AABB<[f64; 2]>);

impl SelectionFunction<TreeItem> for Intersecting {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.intersects(&self.0)
    }

    fn should_unpack_leaf(&self, leaf: &TreeItem) -> bool {
        leaf.envelope().intersects(&self.0)
    }
}
