//! Captures produced by a query engine.

use crate::category::CategoryName;
use crate::span::{ByteRange, Spanned};

/// A `(category, node)` pair emitted by the query engine.
///
/// Captures are transient: they borrow from a single parsed-tree snapshot and
/// are recomputed for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<N> {
    category: CategoryName,
    node: N,
}

impl<N> Capture<N> {
    /// Creates a capture.
    #[must_use]
    pub const fn new(category: CategoryName, node: N) -> Self {
        Self { category, node }
    }

    /// Returns the category the node was captured under.
    #[must_use]
    pub const fn category(&self) -> &CategoryName {
        &self.category
    }

    /// Returns the captured node.
    #[must_use]
    pub const fn node(&self) -> &N {
        &self.node
    }

    /// Discards the category label and returns the node.
    #[must_use]
    pub fn into_node(self) -> N {
        self.node
    }
}

impl<N: Spanned> Spanned for Capture<N> {
    fn byte_range(&self) -> ByteRange {
        self.node.byte_range()
    }
}
