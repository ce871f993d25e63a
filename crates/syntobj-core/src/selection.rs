//! The end-to-end selection pipeline.

use std::num::NonZeroUsize;

use crate::capture::Capture;
use crate::category::CategoryGroup;
use crate::dedup::dedup_by_range;
use crate::error::SelectionError;
use crate::partition::partition;
use crate::reduce::reduce_range;
use crate::resolve::resolve_captures;
use crate::selector::select_nodes;
use crate::span::{ByteRange, Spanned};

/// The outcome of a successful selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<N> {
    range: ByteRange,
    nodes: Vec<N>,
    requested: NonZeroUsize,
}

impl<N> Selection<N> {
    /// Returns the minimal range covering every selected node.
    #[must_use]
    pub const fn range(&self) -> ByteRange {
        self.range
    }

    /// Returns the selected nodes in priority order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the number of nodes the caller asked for.
    #[must_use]
    pub const fn requested(&self) -> NonZeroUsize {
        self.requested
    }

    /// Returns whether fewer nodes than requested were available.
    ///
    /// A partial selection still carries a valid range; callers may warn but
    /// should not treat it as a failure.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.nodes.len() < self.requested.get()
    }

    /// Returns the slice of `source` covered by the selection, if the range
    /// lies on character boundaries within it.
    #[must_use]
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.range.as_range())
    }

    /// Consumes the selection and returns its nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Converts each selected node, keeping the range and requested count.
    ///
    /// Useful for detaching a selection from the tree its nodes borrow.
    #[must_use]
    pub fn map_nodes<M, F>(self, f: F) -> Selection<M>
    where
        F: FnMut(N) -> M,
    {
        Selection {
            range: self.range,
            nodes: self.nodes.into_iter().map(f).collect(),
            requested: self.requested,
        }
    }
}

/// Selects up to `count` nodes for `group` around `cursor` and returns the
/// range covering them.
///
/// The captures are filtered to the group, stripped of their category labels,
/// deduplicated by byte range, partitioned into enclosing and following nodes,
/// truncated to `count`, and reduced to a single range. The function is pure:
/// identical inputs always produce identical output.
///
/// # Errors
///
/// Returns [`SelectionError::NoMatch`] when no capture in the group encloses
/// or follows the cursor.
pub fn select<N, I>(
    captures: I,
    group: &CategoryGroup,
    cursor: usize,
    count: NonZeroUsize,
) -> Result<Selection<N>, SelectionError>
where
    N: Spanned,
    I: IntoIterator<Item = Capture<N>>,
{
    let nodes = resolve_captures(group, captures)
        .into_iter()
        .map(Capture::into_node);
    let unique = dedup_by_range(nodes);
    let chosen = select_nodes(partition(unique, cursor), count);
    let range = reduce_range(&chosen).ok_or_else(|| SelectionError::no_match(group, cursor))?;

    Ok(Selection {
        range,
        nodes: chosen,
        requested: count,
    })
}
