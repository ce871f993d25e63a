//! Reducing selected nodes to one covering range.

use crate::span::{ByteRange, Spanned};

/// Returns `[min start, max end)` over `nodes`, or `None` when empty.
#[must_use]
pub fn reduce_range<N: Spanned>(nodes: &[N]) -> Option<ByteRange> {
    nodes
        .iter()
        .map(Spanned::byte_range)
        .reduce(ByteRange::union)
}
