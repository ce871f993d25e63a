//! Syntax-tree text objects for editor integrations.
//!
//! [`TextObjects`] is the entry point: build it once from a
//! [`Config`](syntobj_config::Config), then answer requests such as "select
//! the inner function around byte 120" against explicit buffer snapshots.
//! A request that finds nothing returns an error for which
//! [`TextObjectsError::is_no_match`] holds; hosts usually treat that as a
//! silent no-op.
//!
//! ```
//! use std::num::NonZeroUsize;
//! use syntobj::{CategoryGroup, Config, TextObjects};
//!
//! let objects = TextObjects::from_config(&Config::default())?;
//! let source = "function foo() { if (x) { bar(); } }";
//! let group: CategoryGroup = "conditional.inner".parse()?;
//!
//! let selection =
//!     objects.select_for_language_id("typescript", source, &group, 27, NonZeroUsize::MIN)?;
//! assert_eq!(selection.text(source), Some("{ bar(); }"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod telemetry;

use std::num::NonZeroUsize;

use thiserror::Error;
use tracing::debug;

pub use syntobj_config::{Config, ConfigError, LanguageAlias, LogFormat};
pub use syntobj_core::{
    ByteRange, CategoryError, CategoryGroup, CategoryName, GroupMode, Selection, SelectionError,
    Spanned,
};
pub use syntobj_syntax::{
    CatalogSource, CompiledQuery, LanguageParseError, LanguageRegistry, ParseResult,
    QueryCatalog, SupportedLanguage, SyntaxError, SyntaxNode, TextObjectSelector,
};

const TEXT_OBJECTS_TARGET: &str = "syntobj";

/// Errors returned by [`TextObjects`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextObjectsError {
    /// A configured language alias names a grammar that does not exist.
    #[error("language '{language_id}' is mapped to an unsupported grammar: {source}")]
    UnknownGrammar {
        /// The editor language identifier from the configuration.
        language_id: String,
        /// Why the grammar name was rejected.
        source: LanguageParseError,
    },

    /// Parsing, catalog, or selection failure.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl TextObjectsError {
    /// Returns whether this is the recoverable "nothing to select" outcome.
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::Syntax(error) if error.is_no_match())
    }
}

/// Configured text-object selection service.
#[derive(Debug)]
pub struct TextObjects {
    selector: TextObjectSelector,
}

impl TextObjects {
    /// Builds the service from configuration: registers language aliases on
    /// top of the defaults and wires the catalog search path.
    ///
    /// # Errors
    ///
    /// Returns [`TextObjectsError::UnknownGrammar`] when an alias names an
    /// unsupported grammar.
    pub fn from_config(config: &Config) -> Result<Self, TextObjectsError> {
        let aliases = config
            .languages()
            .iter()
            .map(|alias| {
                alias
                    .grammar
                    .parse::<SupportedLanguage>()
                    .map(|language| (alias.language_id.as_str(), language))
                    .map_err(|source| TextObjectsError::UnknownGrammar {
                        language_id: alias.language_id.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let registry = LanguageRegistry::builder().register_all(aliases).build();
        let catalogs = QueryCatalog::new()
            .with_search_paths(config.catalog_paths().iter().cloned())
            .with_builtins(config.builtin_catalogs());

        debug!(
            target: TEXT_OBJECTS_TARGET,
            language_ids = registry.len(),
            catalog_paths = ?catalogs.search_paths(),
            builtin_catalogs = config.builtin_catalogs(),
            "text objects configured"
        );

        Ok(Self::with_selector(TextObjectSelector::new(registry, catalogs)))
    }

    /// Wraps an already assembled selector, e.g. one with a custom
    /// [`CatalogSource`].
    #[must_use]
    pub const fn with_selector(selector: TextObjectSelector) -> Self {
        Self { selector }
    }

    /// Returns the underlying selector.
    #[must_use]
    pub const fn selector(&self) -> &TextObjectSelector {
        &self.selector
    }

    /// Compiles every grammar's catalog now instead of on first use.
    ///
    /// # Errors
    ///
    /// Returns the first catalog error encountered.
    pub fn preload(&self) -> Result<(), TextObjectsError> {
        for language in SupportedLanguage::all() {
            self.selector.query_for(*language)?;
        }
        Ok(())
    }

    /// Checks a key binding's category group against the catalog of the
    /// grammar behind `language_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::NoGrammarMapping`] or
    /// [`SyntaxError::UnknownCategory`] wrapped in [`TextObjectsError`].
    pub fn validate_binding(
        &self,
        language_id: &str,
        group: &CategoryGroup,
    ) -> Result<(), TextObjectsError> {
        let language = self.selector.registry().resolve(language_id)?;
        self.selector.validate_group(language, group)?;
        Ok(())
    }

    /// Parses a buffer snapshot using the grammar behind `language_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::NoGrammarMapping`] for an unregistered
    /// identifier or the parser error.
    pub fn parse(&self, language_id: &str, source: &str) -> Result<ParseResult, TextObjectsError> {
        let language = self.selector.registry().resolve(language_id)?;
        Ok(self.selector.parse(language, source)?)
    }

    /// Selects up to `count` nodes of `group` around `cursor` in a snapshot.
    ///
    /// # Errors
    ///
    /// See [`TextObjectSelector::select`].
    pub fn select<'tree>(
        &self,
        parsed: &'tree ParseResult,
        group: &CategoryGroup,
        cursor: usize,
        count: NonZeroUsize,
    ) -> Result<Selection<SyntaxNode<'tree>>, TextObjectsError> {
        Ok(self.selector.select(parsed, group, cursor, count)?)
    }

    /// Parses `source` and selects in one step.
    ///
    /// # Errors
    ///
    /// See [`TextObjectSelector::select_for_language_id`].
    pub fn select_for_language_id(
        &self,
        language_id: &str,
        source: &str,
        group: &CategoryGroup,
        cursor: usize,
        count: NonZeroUsize,
    ) -> Result<Selection<ByteRange>, TextObjectsError> {
        Ok(self
            .selector
            .select_for_language_id(language_id, source, group, cursor, count)?)
    }
}

impl Default for TextObjects {
    fn default() -> Self {
        Self::with_selector(TextObjectSelector::default())
    }
}
