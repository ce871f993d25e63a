//! Compiled pattern catalogs and capture extraction.

use std::collections::BTreeSet;

use syntobj_core::{Capture, CategoryGroup, CategoryName};
use tree_sitter::StreamingIterator;

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::node::SyntaxNode;

/// A pattern catalog compiled against one grammar.
///
/// Every capture name in the catalog must be a valid [`CategoryName`], except
/// names starting with `_`, which are treated as helpers for predicates and
/// never reported as captures.
pub struct CompiledQuery {
    query: tree_sitter::Query,
    language: SupportedLanguage,
    // Indexed by Tree-sitter capture index; `None` marks a helper capture.
    capture_categories: Vec<Option<CategoryName>>,
    categories: BTreeSet<CategoryName>,
}

impl CompiledQuery {
    /// Compiles catalog `text` for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::QueryCompileError`] if the text is not a valid
    /// Tree-sitter query for the grammar or declares a malformed category.
    pub fn compile(text: &str, language: SupportedLanguage) -> Result<Self, SyntaxError> {
        let query = tree_sitter::Query::new(&language.tree_sitter_language(), text)
            .map_err(|e| SyntaxError::query_compile(language, e.to_string()))?;

        let capture_categories = query
            .capture_names()
            .iter()
            .map(|name| category_for_capture(name, language))
            .collect::<Result<Vec<_>, _>>()?;
        let categories = capture_categories.iter().flatten().cloned().collect();

        Ok(Self {
            query,
            language,
            capture_categories,
            categories,
        })
    }

    /// Returns the grammar this catalog was compiled for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns every category the catalog declares, in sorted order.
    #[must_use]
    pub fn categories(&self) -> impl Iterator<Item = &CategoryName> {
        self.categories.iter()
    }

    /// Returns whether the catalog declares `name`.
    #[must_use]
    pub fn declares(&self, name: &CategoryName) -> bool {
        self.categories.contains(name)
    }

    /// Checks that every member of `group` is declared by the catalog.
    ///
    /// Selection itself tolerates undeclared names and reports them as no
    /// match; this check lets hosts reject a bad binding when it is defined.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnknownCategory`] for the first undeclared name.
    pub fn validate_group(&self, group: &CategoryGroup) -> Result<(), SyntaxError> {
        group
            .names()
            .iter()
            .find(|name| !self.declares(name))
            .map_or(Ok(()), |name| {
                Err(SyntaxError::unknown_category(self.language, name.as_str()))
            })
    }

    /// Runs the catalog over `root` and returns every category capture in
    /// emission order.
    ///
    /// A category captured more than once within a single pattern match is
    /// reported once, spanning all of its nodes. `source` must be the text
    /// `root` was parsed from; predicates in the catalog are evaluated
    /// against it.
    #[must_use]
    pub fn execute<'tree>(
        &self,
        root: SyntaxNode<'tree>,
        source: &str,
    ) -> Vec<Capture<SyntaxNode<'tree>>> {
        let mut cursor = tree_sitter::QueryCursor::new();
        let mut matches = cursor.matches(&self.query, root.inner(), source.as_bytes());
        let mut captures: Vec<Capture<SyntaxNode<'tree>>> = Vec::new();

        while let Some(found) = matches.next() {
            let match_start = captures.len();
            for capture in found.captures {
                let index = usize::try_from(capture.index).unwrap_or(usize::MAX);
                let Some(Some(category)) = self.capture_categories.get(index) else {
                    continue;
                };
                let node = SyntaxNode::new(capture.node);
                let earlier = captures
                    .get_mut(match_start..)
                    .and_then(|current| current.iter_mut().find(|c| c.category() == category));
                if let Some(existing) = earlier {
                    *existing = Capture::new(category.clone(), existing.node().spanning(&node));
                    continue;
                }
                captures.push(Capture::new(category.clone(), node));
            }
        }

        captures
    }
}

fn category_for_capture(
    name: &str,
    language: SupportedLanguage,
) -> Result<Option<CategoryName>, SyntaxError> {
    if name.starts_with('_') {
        return Ok(None);
    }
    CategoryName::new(name)
        .map(Some)
        .map_err(|e| SyntaxError::query_compile(language, e.to_string()))
}

impl std::fmt::Debug for CompiledQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledQuery")
            .field("language", &self.language)
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}
