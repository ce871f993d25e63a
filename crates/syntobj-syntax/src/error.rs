//! Error types for parsing, catalog loading, and selection.
//!
//! Every failure in this crate is returned as a [`SyntaxError`] value. Only the
//! editor integration decides how to present one; [`SyntaxError::is_no_match`]
//! identifies the ordinary "nothing to select here" outcome that should be a
//! silent no-op.

use camino::Utf8PathBuf;
use syntobj_core::{CategoryError, SelectionError};
use thiserror::Error;

use crate::language::SupportedLanguage;

/// Errors from syntax text-object operations.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser for a language.
    #[error("failed to initialise parser for {language}: {message}")]
    ParserInitError {
        /// The language that failed to initialise.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// Failed to parse source code.
    #[error("failed to parse {language}: {message}")]
    ParseError {
        /// The language that failed to parse.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// The editor's language identifier has no registered grammar.
    #[error("no grammar registered for language '{language_id}'")]
    NoGrammarMapping {
        /// The editor language identifier that was looked up.
        language_id: String,
    },

    /// No pattern catalog exists for the grammar.
    #[error("no text-object catalog found for {language}")]
    CatalogNotFound {
        /// The grammar without a catalog.
        language: SupportedLanguage,
    },

    /// A catalog override file exists but could not be read.
    #[error("failed to read catalog {path} for {language}: {message}")]
    CatalogReadError {
        /// The grammar whose catalog was being read.
        language: SupportedLanguage,
        /// The file that failed to load.
        path: Utf8PathBuf,
        /// Description of the I/O failure.
        message: String,
    },

    /// The pattern catalog failed to compile.
    #[error("invalid text-object catalog for {language}: {message}")]
    QueryCompileError {
        /// The grammar the catalog was compiled for.
        language: SupportedLanguage,
        /// Description of the compilation failure.
        message: String,
    },

    /// A requested category is not declared by the grammar's catalog.
    #[error("category '{category}' is not declared by the {language} catalog")]
    UnknownCategory {
        /// The grammar whose catalog was consulted.
        language: SupportedLanguage,
        /// The undeclared category.
        category: String,
    },

    /// A category name or group was malformed.
    #[error(transparent)]
    InvalidCategory(#[from] CategoryError),

    /// Nothing in the tree answers the request.
    #[error(transparent)]
    NoMatch(#[from] SelectionError),

    /// Internal error indicating a bug or system failure.
    #[error("internal error: {message}")]
    InternalError {
        /// Description of the internal error.
        message: String,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParserInitError {
            language,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParseError {
            language,
            message: message.into(),
        }
    }

    /// Creates a missing grammar mapping error.
    #[must_use]
    pub fn no_grammar_mapping(language_id: impl Into<String>) -> Self {
        Self::NoGrammarMapping {
            language_id: language_id.into(),
        }
    }

    /// Creates a missing catalog error.
    #[must_use]
    pub const fn catalog_not_found(language: SupportedLanguage) -> Self {
        Self::CatalogNotFound { language }
    }

    /// Creates a catalog read error.
    #[must_use]
    pub fn catalog_read(
        language: SupportedLanguage,
        path: Utf8PathBuf,
        message: impl Into<String>,
    ) -> Self {
        Self::CatalogReadError {
            language,
            path,
            message: message.into(),
        }
    }

    /// Creates a catalog compilation error.
    #[must_use]
    pub fn query_compile(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::QueryCompileError {
            language,
            message: message.into(),
        }
    }

    /// Creates an undeclared category error.
    #[must_use]
    pub fn unknown_category(language: SupportedLanguage, category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            language,
            category: category.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Returns whether this is the recoverable "nothing to select" outcome.
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch(_))
    }
}
