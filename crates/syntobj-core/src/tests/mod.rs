//! Unit tests for `syntobj_core`.



use crate::{ByteRange, Capture, CategoryName};

/// Builds a capture over a bare byte range.
pub(super) fn capture(category: &str, start: usize, end: usize) -> Capture<ByteRange> {
    let name = CategoryName::new(category).expect("valid category in test fixture");
    Capture::new(name, ByteRange::new(start, end))
}
