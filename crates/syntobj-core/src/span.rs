//! Byte ranges and the node view consumed by the selection pipeline.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// A half-open byte interval `[start, end)` within a source buffer.
///
/// Construction normalises reversed bounds, so `start <= end` always holds.
/// This is also the result type returned by a successful selection.
///
/// # Example
///
/// ```
/// use syntobj_core::ByteRange;
///
/// let range = ByteRange::new(4, 10);
/// assert_eq!(range.len(), 6);
/// assert!(range.contains(4));
/// assert!(!range.contains(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ByteRange {
    /// Inclusive start offset.
    start: usize,
    /// Exclusive end offset.
    end: usize,
}

impl ByteRange {
    /// Creates a range, swapping the bounds if they are reversed.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Creates an empty range positioned at `offset`.
    #[must_use]
    pub const fn empty_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the inclusive start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns whether the range covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns whether `offset` lies inside the range (`start <= offset < end`).
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the combined distance `|cursor - start| + |cursor - end|`.
    ///
    /// For a range enclosing the cursor this equals the range length, so the
    /// smallest value identifies the innermost of a set of nested ranges.
    #[must_use]
    pub const fn distance_from(&self, cursor: usize) -> usize {
        self.start
            .abs_diff(cursor)
            .saturating_add(self.end.abs_diff(cursor))
    }

    /// Converts the range into a standard library range.
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for ByteRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<ByteRange> for Range<usize> {
    fn from(range: ByteRange) -> Self {
        range.start..range.end
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A read-only view of a syntax node: anything with a byte range.
///
/// The selection pipeline never walks a tree. It only needs the byte extent of
/// each captured node, so parser collaborators implement this trait for their
/// node handles.
pub trait Spanned {
    /// Returns the half-open byte range covered by the node.
    fn byte_range(&self) -> ByteRange;
}

impl Spanned for ByteRange {
    fn byte_range(&self) -> ByteRange {
        *self
    }
}

impl<T: Spanned + ?Sized> Spanned for &T {
    fn byte_range(&self) -> ByteRange {
        (**self).byte_range()
    }
}
