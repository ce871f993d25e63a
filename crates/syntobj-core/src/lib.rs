//! Cursor-relative node selection over syntax-tree query captures.
//!
//! This crate holds the parser-independent heart of syntax text objects:
//! given the captures a query engine produced for one tree snapshot, a cursor
//! offset, and a repetition count, it decides which nodes answer a request
//! such as "select the inner function" and returns the byte range spanning
//! them.
//!
//! # Pipeline
//!
//! 1. [`resolve_captures`] keeps captures whose category is in the requested
//!    [`CategoryGroup`].
//! 2. [`dedup_by_range`] collapses nodes covering identical bytes.
//! 3. [`partition()`] splits nodes into those enclosing the cursor (tightest
//!    first) and those following it (earliest first).
//! 4. [`select_nodes`] takes the first `count` in that priority order.
//! 5. [`reduce_range`] unions the chosen ranges.
//!
//! [`select`] runs all five steps and reports an empty outcome as
//! [`SelectionError::NoMatch`].
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use syntobj_core::{ByteRange, Capture, CategoryGroup, CategoryName, select};
//!
//! let function = CategoryName::new("function.outer")?;
//! let captures = vec![
//!     Capture::new(function.clone(), ByteRange::new(0, 40)),
//!     Capture::new(function.clone(), ByteRange::new(10, 20)),
//! ];
//!
//! let group = CategoryGroup::single(function);
//! let selection = select(captures, &group, 12, NonZeroUsize::MIN)?;
//! assert_eq!(selection.range(), ByteRange::new(10, 20));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod capture;
mod category;
mod dedup;
mod error;
mod partition;
mod reduce;
mod resolve;
mod selection;
mod selector;
mod span;

pub use capture::Capture;
pub use category::{CategoryGroup, CategoryName, GroupMode};
pub use dedup::dedup_by_range;
pub use error::{CategoryError, SelectionError};
pub use partition::{Partition, partition};
pub use reduce::reduce_range;
pub use resolve::resolve_captures;
pub use selection::{Selection, select};
pub use selector::select_nodes;
pub use span::{ByteRange, Spanned};

#[cfg(test)]
mod tests;
