//! Error types for category parsing and selection.

use thiserror::Error;

use crate::category::CategoryGroup;

/// Errors raised while building category names or groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CategoryError {
    /// The category name does not follow the segment grammar.
    #[error("invalid category name '{name}': {reason}")]
    InvalidName {
        /// The rejected input.
        name: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A category group was built without any member.
    #[error("a category group needs at least one category")]
    EmptyGroup,
}

impl CategoryError {
    /// Creates an invalid-name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by the selection pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectionError {
    /// Nothing in the capture set answers the request. This is the expected,
    /// recoverable "nothing to select here" outcome.
    #[error("no match for {categories} at byte {cursor}")]
    NoMatch {
        /// The requested categories, rendered as a group.
        categories: String,
        /// The cursor offset of the request.
        cursor: usize,
    },
}

impl SelectionError {
    /// Creates a no-match error for the given request.
    #[must_use]
    pub fn no_match(group: &CategoryGroup, cursor: usize) -> Self {
        Self::NoMatch {
            categories: group.to_string(),
            cursor,
        }
    }
}
