//! Editor language identifier aliases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a [`LanguageAlias`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageAliasParseError {
    /// The `=` between identifier and grammar was missing.
    #[error("alias '{0}' is missing the '=' between language id and grammar")]
    MissingGrammar(String),
    /// One side of the assignment was blank.
    #[error("alias '{0}' has an empty language id or grammar")]
    Empty(String),
}

/// Maps an editor language identifier onto a grammar name, e.g.
/// `rustic=rust`.
///
/// The grammar is kept as text here; it is resolved to a parser when the
/// language registry is built.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LanguageAlias {
    /// Identifier the editor reports for a buffer.
    pub language_id: String,
    /// Grammar name such as `rust`, `python` or `typescript`.
    pub grammar: String,
}

impl LanguageAlias {
    /// Creates an alias.
    #[must_use]
    pub fn new(language_id: impl Into<String>, grammar: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            grammar: grammar.into(),
        }
    }
}

impl fmt::Display for LanguageAlias {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}={}", self.language_id, self.grammar)
    }
}

impl FromStr for LanguageAlias {
    type Err = LanguageAliasParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (language_id, grammar) = input
            .split_once('=')
            .ok_or_else(|| LanguageAliasParseError::MissingGrammar(input.to_owned()))?;
        let (id, name) = (language_id.trim(), grammar.trim());
        if id.is_empty() || name.is_empty() {
            return Err(LanguageAliasParseError::Empty(input.to_owned()));
        }
        Ok(Self::new(id, name))
    }
}
