//! Collapsing captures that denote the same byte range.

use std::collections::HashSet;

use crate::span::{ByteRange, Spanned};

/// Removes nodes whose `(start, end)` range was already seen.
///
/// The first occurrence survives, so the output keeps input order. Distinct
/// nodes with identical ranges, such as a wrapper and its only child, collapse
/// into one entry.
#[must_use]
pub fn dedup_by_range<N, I>(nodes: I) -> Vec<N>
where
    N: Spanned,
    I: IntoIterator<Item = N>,
{
    let mut seen: HashSet<ByteRange> = HashSet::new();
    nodes
        .into_iter()
        .filter(|node| seen.insert(node.byte_range()))
        .collect()
}
