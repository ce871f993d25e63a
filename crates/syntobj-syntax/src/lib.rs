//! Tree-sitter powered text objects.
//!
//! This crate connects the selection pipeline in `syntobj_core` to real
//! syntax trees:
//!
//! - [`Parser`] produces [`ParseResult`] snapshots that own their source text.
//! - [`QueryCatalog`] finds each grammar's pattern catalog, preferring
//!   override directories over the catalogs embedded in this crate.
//! - [`CompiledQuery`] compiles a catalog and turns matches into category
//!   captures over [`SyntaxNode`]s.
//! - [`LanguageRegistry`] maps editor language identifiers to grammars.
//! - [`TextObjectSelector`] threads a snapshot, a category group, a cursor,
//!   and a count through all of the above.
//!
//! # Supported Languages
//!
//! - Rust (`.rs`)
//! - Python (`.py`, `.pyi`)
//! - TypeScript and JavaScript (`.ts`, `.tsx`, `.js`, `.jsx`, ...)
//!
//! # Catalogs
//!
//! A catalog is a Tree-sitter query whose capture names are categories such
//! as `@function.inner`. Captures prefixed with `_` are helpers and never
//! selected. The built-in catalogs declare `function`, `class`, `loop`,
//! `conditional`, `parameter`, `call`, and `block` in `.outer` and `.inner`
//! form, plus `comment.outer`.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use syntobj_core::CategoryGroup;
//! use syntobj_syntax::{SupportedLanguage, TextObjectSelector};
//!
//! let selector = TextObjectSelector::default();
//! let source = "function foo() { if (x) { bar(); } }";
//! let parsed = selector.parse(SupportedLanguage::TypeScript, source)?;
//!
//! let group: CategoryGroup = "conditional.inner".parse()?;
//! let selection = selector.select(&parsed, &group, 27, NonZeroUsize::MIN)?;
//! assert_eq!(selection.text(source), Some("{ bar(); }"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod catalog;
mod error;
mod language;
mod node;
mod parser;
mod query;
mod registry;
mod selector;

pub use catalog::{CATALOG_FILE_NAME, CatalogOrigin, CatalogSource, LoadedCatalog, QueryCatalog};
pub use error::SyntaxError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use node::SyntaxNode;
pub use parser::{ParseDiagnostic, ParseResult, Parser};
pub use query::CompiledQuery;
pub use registry::{LanguageRegistry, LanguageRegistryBuilder};
pub use selector::TextObjectSelector;

#[cfg(test)]
mod tests;
