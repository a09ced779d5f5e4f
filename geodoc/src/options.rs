use serde::{Deserialize, Serialize};

/// Minimum number of children for which a collection builds an R-tree.
pub const DEFAULT_INDEX_CHILDREN: usize = 64;

/// Options that control parsing of documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Reject documents whose geometry is structurally correct but not valid, e.g. has
    /// coordinates outside of the longitude/latitude range or unclosed polygon rings.
    pub require_valid: bool,
    /// Collections with at least this many children build an R-tree over the children
    /// rectangles. Smaller collections are scanned linearly. `0` always builds the tree.
    pub index_children: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            require_valid: false,
            index_children: DEFAULT_INDEX_CHILDREN,
        }
    }
}

impl ParseOptions {
    /// Sets the `require_valid` flag.
    pub fn with_require_valid(mut self, require_valid: bool) -> Self {
        self.require_valid = require_valid;
        self
    }

    /// Sets the `index_children` threshold.
    pub fn with_index_children(mut self, index_children: usize) -> Self {
        self.index_children = index_children;
        self
    }
}
