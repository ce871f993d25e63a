//! Category names and the groups requested together by one selection.
//!
//! A category is a hierarchical label such as `function.inner` or
//! `loop.outer`, as declared by a pattern catalog. Names are validated on
//! construction so that a typo in a binding is reported immediately instead
//! of silently selecting nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CategoryError;

/// A validated category name, e.g. `function.inner`.
///
/// A name is one or more dot-separated segments. Each segment is made of
/// lowercase ASCII letters, digits, or underscores, and the name starts with a
/// lowercase letter.
///
/// # Example
///
/// ```
/// use syntobj_core::CategoryName;
///
/// let name = CategoryName::new("function.inner")?;
/// assert_eq!(name.object(), "function");
/// assert_eq!(name.part(), Some("inner"));
/// assert!(CategoryName::new("Function").is_err());
/// # Ok::<(), syntobj_core::CategoryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Validates and wraps a category name.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::InvalidName`] if the name is empty or violates
    /// the segment grammar.
    pub fn new(name: impl Into<String>) -> Result<Self, CategoryError> {
        let owned: String = name.into();
        validate(&owned)?;
        Ok(Self(owned))
    }

    /// Returns the full name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the leading segment, e.g. `function` for `function.inner`.
    #[must_use]
    pub fn object(&self) -> &str {
        self.0
            .split_once('.')
            .map_or(self.0.as_str(), |(object, _)| object)
    }

    /// Returns everything after the leading segment, if present.
    #[must_use]
    pub fn part(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, part)| part)
    }
}

fn validate(name: &str) -> Result<(), CategoryError> {
    let invalid = |reason: &str| Err(CategoryError::invalid_name(name, reason));

    if name.is_empty() {
        return invalid("name is empty");
    }
    if !name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
        return invalid("name must start with a lowercase ASCII letter");
    }
    for segment in name.split('.') {
        if segment.is_empty() {
            return invalid("name contains an empty segment");
        }
        if let Some(bad) = segment
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return invalid(&format!("unexpected character '{bad}'"));
        }
    }
    Ok(())
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryName {
    type Err = CategoryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::new(input.trim())
    }
}

impl TryFrom<&str> for CategoryName {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(name: CategoryName) -> Self {
        name.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How the members of a [`CategoryGroup`] are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMode {
    /// Union of all members' captures. Member order never biases selection;
    /// only proximity to the cursor does.
    #[default]
    Union,
    /// The first member, in listed order, that has any capture wins and the
    /// other members are ignored.
    FirstMatch,
}

/// An ordered, non-empty set of categories requested together.
///
/// Duplicate names collapse onto their first occurrence.
///
/// # Example
///
/// ```
/// use syntobj_core::{CategoryGroup, GroupMode};
///
/// let group: CategoryGroup = "function.outer, class.outer".parse()?;
/// assert_eq!(group.len(), 2);
/// assert_eq!(group.mode(), GroupMode::Union);
///
/// let alternatives: CategoryGroup = "parameter.inner|call.inner".parse()?;
/// assert_eq!(alternatives.mode(), GroupMode::FirstMatch);
/// # Ok::<(), syntobj_core::CategoryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryGroup {
    names: Vec<CategoryName>,
    mode: GroupMode,
}

impl CategoryGroup {
    /// Creates a group holding a single category.
    #[must_use]
    pub fn single(name: CategoryName) -> Self {
        Self {
            names: vec![name],
            mode: GroupMode::Union,
        }
    }

    /// Creates a union group from the given names.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::EmptyGroup`] when no names are supplied.
    pub fn new<I>(names: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = CategoryName>,
    {
        Self::with_mode(names, GroupMode::Union)
    }

    /// Creates a group whose first matching member wins.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::EmptyGroup`] when no names are supplied.
    pub fn first_match<I>(names: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = CategoryName>,
    {
        Self::with_mode(names, GroupMode::FirstMatch)
    }

    /// Creates a group with an explicit combination mode.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::EmptyGroup`] when no names are supplied.
    pub fn with_mode<I>(names: I, mode: GroupMode) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = CategoryName>,
    {
        let mut unique: Vec<CategoryName> = Vec::new();
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.is_empty() {
            return Err(CategoryError::EmptyGroup);
        }
        Ok(Self {
            names: unique,
            mode,
        })
    }

    /// Returns the member names in request order.
    #[must_use]
    pub fn names(&self) -> &[CategoryName] {
        &self.names
    }

    /// Returns how members are combined.
    #[must_use]
    pub const fn mode(&self) -> GroupMode {
        self.mode
    }

    /// Returns the number of distinct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: groups are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns whether `name` is a member of the group.
    #[must_use]
    pub fn contains(&self, name: &CategoryName) -> bool {
        self.names.contains(name)
    }
}

impl From<CategoryName> for CategoryGroup {
    fn from(name: CategoryName) -> Self {
        Self::single(name)
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self.mode {
            GroupMode::Union => ",",
            GroupMode::FirstMatch => "|",
        };
        let joined: Vec<&str> = self.names.iter().map(CategoryName::as_str).collect();
        f.write_str(&joined.join(separator))
    }
}

/// Parses `a.b,c.d` as a union group and `a.b|c.d` as a first-match group.
impl FromStr for CategoryGroup {
    type Err = CategoryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let has_union = input.contains(',');
        let has_alternatives = input.contains('|');
        if has_union && has_alternatives {
            return Err(CategoryError::invalid_name(
                input,
                "a group cannot mix ',' and '|' separators",
            ));
        }

        let (separator, mode) = if has_alternatives {
            ('|', GroupMode::FirstMatch)
        } else {
            (',', GroupMode::Union)
        };

        let names = input
            .split(separator)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(CategoryName::new)
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_mode(names, mode)
    }
}

impl TryFrom<String> for CategoryGroup {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryGroup> for String {
    fn from(group: CategoryGroup) -> Self {
        group.to_string()
    }
}
