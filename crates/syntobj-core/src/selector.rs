//! Picking the requested number of nodes from a partition.

use std::num::NonZeroUsize;

use crate::partition::Partition;

/// Returns the first `count` nodes in priority order: every enclosing node
/// (tightest first) and then every following node (earliest first).
///
/// Fewer nodes are returned when fewer exist. With `count > 1` the chosen
/// nodes need not be contiguous in the source.
#[must_use]
pub fn select_nodes<N>(partition: Partition<N>, count: NonZeroUsize) -> Vec<N> {
    partition.into_priority_order().take(count.get()).collect()
}
