//! Tree-sitter parsing wrapper producing immutable tree snapshots.
//!
//! A [`ParseResult`] owns the tree together with the exact source text it was
//! built from, so every selection runs against an explicit snapshot rather
//! than ambient editor state.

use syntobj_core::ByteRange;

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::node::SyntaxNode;

/// A parsed tree snapshot and the source it describes.
///
/// Tree-sitter is error-tolerant, so a snapshot may contain ERROR or MISSING
/// nodes and still be usable for selection.
#[derive(Debug, Clone)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
    language: SupportedLanguage,
}

impl ParseResult {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source text that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the grammar used to parse the source.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns the root node of the tree.
    #[must_use]
    pub fn root_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self.tree.root_node())
    }

    /// Returns whether the tree contains ERROR or MISSING nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Collects a diagnostic for every ERROR or MISSING node, in document
    /// order.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<ParseDiagnostic> {
        let mut found = Vec::new();
        let mut cursor = self.tree.walk();
        loop {
            let node = cursor.node();
            if node.is_error() || node.is_missing() {
                found.push(ParseDiagnostic::from_node(node));
            }
            if node.has_error() && cursor.goto_first_child() {
                continue;
            }
            if !advance_past_subtree(&mut cursor) {
                return found;
            }
        }
    }
}

/// Moves the cursor to the next sibling, climbing as needed. Returns `false`
/// once the whole tree has been visited.
fn advance_past_subtree(cursor: &mut tree_sitter::TreeCursor<'_>) -> bool {
    loop {
        if cursor.goto_next_sibling() {
            return true;
        }
        if !cursor.goto_parent() {
            return false;
        }
    }
}

/// A syntax problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// Byte range of the problem in the source.
    pub byte_range: ByteRange,
    /// One-based line where the problem starts.
    pub line: u32,
    /// One-based column where the problem starts.
    pub column: u32,
    /// Human-readable description.
    pub message: String,
}

impl ParseDiagnostic {
    fn from_node(node: tree_sitter::Node<'_>) -> Self {
        let (line, column) = point_to_one_based(node.start_position());
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            String::from("syntax error")
        };
        Self {
            byte_range: ByteRange::from(node.byte_range()),
            line,
            column,
            message,
        }
    }
}

/// Converts a zero-based Tree-sitter point to one-based line and column.
fn point_to_one_based(point: tree_sitter::Point) -> (u32, u32) {
    let line = u32::try_from(point.row.saturating_add(1)).unwrap_or(u32::MAX);
    let column = u32::try_from(point.column.saturating_add(1)).unwrap_or(u32::MAX);
    (line, column)
}

/// Tree-sitter parser configured for one grammar.
pub struct Parser {
    inner: tree_sitter::Parser,
    language: SupportedLanguage,
}

impl Parser {
    /// Creates a parser for the given grammar.
    ///
    /// # Errors
    ///
    /// Returns an error if Tree-sitter rejects the grammar, typically because
    /// of an ABI version mismatch.
    pub fn new(language: SupportedLanguage) -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&language.tree_sitter_language())
            .map_err(|e| SyntaxError::parser_init(language, e.to_string()))?;

        Ok(Self { inner, language })
    }

    /// Returns the grammar this parser is configured for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Parses `source` into a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if Tree-sitter produces no tree at all, which only
    /// happens when the parser is misconfigured.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse(self.language, "parser produced no tree"))?;

        Ok(ParseResult {
            tree,
            source: source.to_owned(),
            language: self.language,
        })
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
