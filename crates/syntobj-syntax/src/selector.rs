//! Text-object selection over parsed snapshots.
//!
//! [`TextObjectSelector`] ties the pieces together: it resolves editor
//! language identifiers through a [`LanguageRegistry`], loads and compiles
//! each grammar's catalog once, runs the catalog over an explicit
//! [`ParseResult`], and hands the captures to [`syntobj_core::select`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use syntobj_core::{ByteRange, CategoryGroup, Selection, Spanned};
use tracing::{trace, warn};

use crate::catalog::{CatalogSource, QueryCatalog};
use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::node::SyntaxNode;
use crate::parser::{ParseResult, Parser};
use crate::query::CompiledQuery;
use crate::registry::LanguageRegistry;

const SELECTOR_TARGET: &str = "syntobj_syntax::selector";

type CachedQuery = OnceCell<Result<Arc<CompiledQuery>, SyntaxError>>;

/// One lazily filled slot per grammar. A failed compile is cached like a
/// successful one so a broken catalog is reported once and never retried.
#[derive(Default)]
struct QueryCache {
    rust: CachedQuery,
    python: CachedQuery,
    typescript: CachedQuery,
}

impl QueryCache {
    const fn slot(&self, language: SupportedLanguage) -> &CachedQuery {
        match language {
            SupportedLanguage::Rust => &self.rust,
            SupportedLanguage::Python => &self.python,
            SupportedLanguage::TypeScript => &self.typescript,
        }
    }
}

/// Selects text objects from syntax trees.
///
/// The selector is `Send + Sync` and intended to be built once and shared.
/// Catalogs compile on first use; parsers are cached per grammar behind a
/// mutex.
pub struct TextObjectSelector {
    registry: LanguageRegistry,
    catalogs: Box<dyn CatalogSource>,
    queries: QueryCache,
    parsers: Mutex<HashMap<SupportedLanguage, Parser>>,
}

impl TextObjectSelector {
    /// Creates a selector from a registry and a catalog source.
    #[must_use]
    pub fn new(registry: LanguageRegistry, catalogs: impl CatalogSource + 'static) -> Self {
        Self {
            registry,
            catalogs: Box::new(catalogs),
            queries: QueryCache::default(),
            parsers: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the language registry.
    #[must_use]
    pub const fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Returns the compiled catalog for `language`, compiling it on first
    /// use.
    ///
    /// # Errors
    ///
    /// Returns the catalog lookup or compilation error. The same error is
    /// returned on every later call for that grammar.
    pub fn query_for(
        &self,
        language: SupportedLanguage,
    ) -> Result<Arc<CompiledQuery>, SyntaxError> {
        self.queries
            .slot(language)
            .get_or_init(|| self.load_query(language))
            .clone()
    }

    fn load_query(&self, language: SupportedLanguage) -> Result<Arc<CompiledQuery>, SyntaxError> {
        let compiled = self.catalogs.load(language).and_then(|catalog| {
            CompiledQuery::compile(&catalog.text, language).map(Arc::new)
        });
        if let Err(error) = &compiled {
            warn!(
                target: SELECTOR_TARGET,
                language = %language,
                error = %error,
                "text-object catalog unavailable"
            );
        }
        compiled
    }

    /// Checks that `group` only names categories the grammar's catalog
    /// declares.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnknownCategory`] for an undeclared name, or the
    /// catalog error if the catalog cannot be compiled.
    pub fn validate_group(
        &self,
        language: SupportedLanguage,
        group: &CategoryGroup,
    ) -> Result<(), SyntaxError> {
        self.query_for(language)?.validate_group(group)
    }

    /// Parses `source` with a cached parser for `language`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot be created or the parser cache
    /// lock is poisoned.
    pub fn parse(
        &self,
        language: SupportedLanguage,
        source: &str,
    ) -> Result<ParseResult, SyntaxError> {
        let mut parsers = self
            .parsers
            .lock()
            .map_err(|_| SyntaxError::internal_error("parser cache lock poisoned"))?;

        let parser = match parsers.entry(language) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(Parser::new(language)?),
        };
        parser.parse(source)
    }

    /// Selects up to `count` nodes of `group` around `cursor` in an explicit
    /// tree snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::NoMatch`] when nothing encloses or follows the
    /// cursor, or the catalog error for the snapshot's grammar.
    pub fn select<'tree>(
        &self,
        parsed: &'tree ParseResult,
        group: &CategoryGroup,
        cursor: usize,
        count: NonZeroUsize,
    ) -> Result<Selection<SyntaxNode<'tree>>, SyntaxError> {
        let query = self.query_for(parsed.language())?;
        let captures = query.execute(parsed.root_node(), parsed.source());
        let outcome = syntobj_core::select(captures, group, cursor, count);

        match &outcome {
            Ok(selection) => trace!(
                target: SELECTOR_TARGET,
                language = %parsed.language(),
                categories = %group,
                cursor,
                range = %selection.range(),
                partial = selection.is_partial(),
                "selected text object"
            ),
            Err(error) => trace!(
                target: SELECTOR_TARGET,
                language = %parsed.language(),
                error = %error,
                "no text object selected"
            ),
        }

        outcome.map_err(SyntaxError::from)
    }

    /// Parses `source` as `language` and selects from the fresh snapshot.
    ///
    /// The returned selection carries node ranges rather than nodes because
    /// the snapshot does not outlive the call.
    ///
    /// # Errors
    ///
    /// See [`Self::parse`] and [`Self::select`].
    pub fn select_in_source(
        &self,
        language: SupportedLanguage,
        source: &str,
        group: &CategoryGroup,
        cursor: usize,
        count: NonZeroUsize,
    ) -> Result<Selection<ByteRange>, SyntaxError> {
        let parsed = self.parse(language, source)?;
        let selection = self.select(&parsed, group, cursor, count)?;
        Ok(selection.map_nodes(|node| node.byte_range()))
    }

    /// Resolves an editor language identifier and selects from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::NoGrammarMapping`] for an unregistered
    /// identifier, otherwise see [`Self::select_in_source`].
    pub fn select_for_language_id(
        &self,
        language_id: &str,
        source: &str,
        group: &CategoryGroup,
        cursor: usize,
        count: NonZeroUsize,
    ) -> Result<Selection<ByteRange>, SyntaxError> {
        let language = self.registry.resolve(language_id)?;
        self.select_in_source(language, source, group, cursor, count)
    }
}

impl Default for TextObjectSelector {
    fn default() -> Self {
        Self::new(LanguageRegistry::default(), QueryCatalog::default())
    }
}

impl std::fmt::Debug for TextObjectSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextObjectSelector")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
