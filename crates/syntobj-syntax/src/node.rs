//! Span-bearing view over Tree-sitter nodes.

use syntobj_core::{ByteRange, Spanned};

/// A node borrowed from a parsed tree.
///
/// The wrapper exists so the selection pipeline can read a node's byte range
/// through [`Spanned`] without depending on Tree-sitter. A catalog pattern that
/// repeats one capture name, such as a parameter and its trailing comma,
/// yields a node whose span covers every repeated capture; [`kind`] and
/// [`inner`] still describe the first of them.
///
/// [`kind`]: SyntaxNode::kind
/// [`inner`]: SyntaxNode::inner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxNode<'tree> {
    inner: tree_sitter::Node<'tree>,
    span: ByteRange,
}

impl<'tree> SyntaxNode<'tree> {
    /// Wraps a Tree-sitter node.
    #[must_use]
    pub fn new(inner: tree_sitter::Node<'tree>) -> Self {
        Self {
            inner,
            span: ByteRange::from(inner.byte_range()),
        }
    }

    /// Widens the span to also cover `other`.
    #[must_use]
    pub fn spanning(self, other: &Self) -> Self {
        Self {
            inner: self.inner,
            span: self.span.union(other.span),
        }
    }

    /// Returns the grammar's name for this node type.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    /// Returns the source text this node covers, or `None` when `source` is
    /// not the text the tree was parsed from.
    #[must_use]
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.span.as_range())
    }

    /// Returns the underlying Tree-sitter node.
    #[must_use]
    pub const fn inner(&self) -> tree_sitter::Node<'tree> {
        self.inner
    }
}

impl Spanned for SyntaxNode<'_> {
    fn byte_range(&self) -> ByteRange {
        self.span
    }
}

impl<'tree> From<tree_sitter::Node<'tree>> for SyntaxNode<'tree> {
    fn from(inner: tree_sitter::Node<'tree>) -> Self {
        Self::new(inner)
    }
}
