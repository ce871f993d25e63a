//! Proximity partitioning of candidate nodes around the cursor.

use crate::span::Spanned;

/// Candidate nodes split by their position relative to the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<N> {
    enclosing: Vec<N>,
    following: Vec<N>,
}

impl<N> Partition<N> {
    /// Nodes containing the cursor, tightest first.
    #[must_use]
    pub fn enclosing(&self) -> &[N] {
        &self.enclosing
    }

    /// Nodes starting after the cursor, in textual order.
    #[must_use]
    pub fn following(&self) -> &[N] {
        &self.following
    }

    /// Returns the total number of candidates kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enclosing.len().saturating_add(self.following.len())
    }

    /// Returns whether no candidate survived partitioning.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enclosing.is_empty() && self.following.is_empty()
    }

    /// Consumes the partition, yielding enclosing nodes and then following
    /// nodes in priority order.
    #[must_use]
    pub fn into_priority_order(self) -> impl Iterator<Item = N> {
        self.enclosing.into_iter().chain(self.following)
    }
}

/// Splits `nodes` into those enclosing `cursor` and those following it.
///
/// A node encloses the cursor when `start <= cursor < end`; these are ordered
/// by the combined distance `|cursor - start| + |cursor - end|`, which puts the
/// innermost of a nested chain first. A node follows the cursor when
/// `start > cursor`; these are ordered by ascending start. Both sorts are
/// stable, so ties keep input order. Nodes that end at or before the cursor
/// are dropped: selection only ever looks inward or forward.
#[must_use]
pub fn partition<N, I>(nodes: I, cursor: usize) -> Partition<N>
where
    N: Spanned,
    I: IntoIterator<Item = N>,
{
    let mut enclosing = Vec::new();
    let mut following = Vec::new();

    for node in nodes {
        let range = node.byte_range();
        if range.contains(cursor) {
            enclosing.push(node);
        } else if range.start() > cursor {
            following.push(node);
        }
    }

    enclosing.sort_by_key(|node| node.byte_range().distance_from(cursor));
    following.sort_by_key(|node| node.byte_range().start());

    Partition {
        enclosing,
        following,
    }
}
