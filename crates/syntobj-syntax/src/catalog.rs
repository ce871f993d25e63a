//! Pattern catalog lookup.
//!
//! A catalog is the Tree-sitter query text declaring which nodes belong to
//! which text-object category for one grammar. Catalogs are found by
//! searching override directories first, each laid out as
//! `<dir>/<language>/textobjects.scm`, then falling back to the catalogs
//! embedded in this crate.

use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;

/// File name of a text-object catalog inside a language directory.
pub const CATALOG_FILE_NAME: &str = "textobjects.scm";

const CATALOG_TARGET: &str = "syntobj_syntax::catalog";

const RUST_CATALOG: &str = include_str!("../queries/rust/textobjects.scm");
const PYTHON_CATALOG: &str = include_str!("../queries/python/textobjects.scm");
const TYPESCRIPT_CATALOG: &str = include_str!("../queries/typescript/textobjects.scm");

/// Where a loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// The catalog embedded in this crate.
    Builtin,
    /// An override file on disk.
    File(Utf8PathBuf),
}

/// Catalog text ready for compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    /// The query source.
    pub text: String,
    /// Where the text was found.
    pub origin: CatalogOrigin,
}

impl LoadedCatalog {
    /// Creates a catalog from text and its origin.
    #[must_use]
    pub fn new(text: impl Into<String>, origin: CatalogOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }
}

/// Supplies catalog text for a grammar.
///
/// The selector only talks to catalogs through this trait so hosts can serve
/// catalogs from elsewhere and tests can substitute fixed text.
pub trait CatalogSource: Send + Sync {
    /// Loads the catalog for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::CatalogNotFound`] when no catalog exists and
    /// [`SyntaxError::CatalogReadError`] when one exists but cannot be read.
    fn load(&self, language: SupportedLanguage) -> Result<LoadedCatalog, SyntaxError>;
}

/// File-system backed catalog lookup with embedded fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCatalog {
    search_paths: Vec<Utf8PathBuf>,
    builtins: bool,
}

impl QueryCatalog {
    /// Creates a catalog that serves only the embedded catalogs.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_paths: Vec::new(),
            builtins: true,
        }
    }

    /// Appends an override directory. Directories are searched in the order
    /// they were added.
    #[must_use]
    pub fn with_search_path(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }

    /// Appends several override directories.
    #[must_use]
    pub fn with_search_paths<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        self.search_paths.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Enables or disables the embedded fallback catalogs.
    #[must_use]
    pub const fn with_builtins(mut self, enabled: bool) -> Self {
        self.builtins = enabled;
        self
    }

    /// Returns the override directories in search order.
    #[must_use]
    pub fn search_paths(&self) -> &[Utf8PathBuf] {
        &self.search_paths
    }

    /// Returns the catalog embedded for `language`.
    #[must_use]
    pub const fn builtin(language: SupportedLanguage) -> &'static str {
        match language {
            SupportedLanguage::Rust => RUST_CATALOG,
            SupportedLanguage::Python => PYTHON_CATALOG,
            SupportedLanguage::TypeScript => TYPESCRIPT_CATALOG,
        }
    }

    fn read_override(
        dir: &Utf8Path,
        language: SupportedLanguage,
    ) -> Result<Option<LoadedCatalog>, SyntaxError> {
        let path = dir.join(language.as_str()).join(CATALOG_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(LoadedCatalog::new(text, CatalogOrigin::File(path)))),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(SyntaxError::catalog_read(
                language,
                path,
                error.to_string(),
            )),
        }
    }
}

impl Default for QueryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for QueryCatalog {
    fn load(&self, language: SupportedLanguage) -> Result<LoadedCatalog, SyntaxError> {
        for dir in &self.search_paths {
            if let Some(catalog) = Self::read_override(dir, language)? {
                debug!(
                    target: CATALOG_TARGET,
                    language = %language,
                    origin = ?catalog.origin,
                    "loaded catalog override"
                );
                return Ok(catalog);
            }
        }

        if !self.builtins {
            return Err(SyntaxError::catalog_not_found(language));
        }

        debug!(target: CATALOG_TARGET, language = %language, "using built-in catalog");
        Ok(LoadedCatalog::new(
            Self::builtin(language),
            CatalogOrigin::Builtin,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_dir(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("temp dir is UTF-8")
    }

    fn write_override(root: &Utf8Path, language: SupportedLanguage, text: &str) -> Utf8PathBuf {
        let dir = root.join(language.as_str());
        std::fs::create_dir_all(&dir).expect("create language dir");
        let path = dir.join(CATALOG_FILE_NAME);
        std::fs::write(&path, text).expect("write catalog");
        path
    }

    #[rstest]
    #[case(SupportedLanguage::Rust)]
    #[case(SupportedLanguage::Python)]
    #[case(SupportedLanguage::TypeScript)]
    fn builtin_catalogs_are_served_by_default(#[case] language: SupportedLanguage) {
        let catalog = QueryCatalog::new().load(language).expect("builtin catalog");

        assert_eq!(catalog.origin, CatalogOrigin::Builtin);
        assert!(catalog.text.contains("@function.outer"));
    }

    #[test]
    fn override_directory_wins_over_builtin() {
        let dir = TempDir::new().expect("temp dir");
        let root = utf8_dir(&dir);
        let path = write_override(&root, SupportedLanguage::Rust, "(block) @block.outer\n");

        let catalog = QueryCatalog::new()
            .with_search_path(root)
            .load(SupportedLanguage::Rust)
            .expect("override catalog");

        assert_eq!(catalog.origin, CatalogOrigin::File(path));
        assert_eq!(catalog.text, "(block) @block.outer\n");
    }

    #[test]
    fn earlier_search_path_takes_precedence() {
        let first = TempDir::new().expect("temp dir");
        let second = TempDir::new().expect("temp dir");
        write_override(&utf8_dir(&first), SupportedLanguage::Python, "(block) @block.outer\n");
        write_override(&utf8_dir(&second), SupportedLanguage::Python, "(call) @call.outer\n");

        let catalog = QueryCatalog::new()
            .with_search_paths([utf8_dir(&first), utf8_dir(&second)])
            .load(SupportedLanguage::Python)
            .expect("override catalog");

        assert_eq!(catalog.text, "(block) @block.outer\n");
    }

    #[test]
    fn directories_without_the_language_fall_through() {
        let dir = TempDir::new().expect("temp dir");
        write_override(&utf8_dir(&dir), SupportedLanguage::Rust, "(block) @block.outer\n");

        let catalog = QueryCatalog::new()
            .with_search_path(utf8_dir(&dir))
            .load(SupportedLanguage::Python)
            .expect("builtin catalog");

        assert_eq!(catalog.origin, CatalogOrigin::Builtin);
    }

    #[test]
    fn disabled_builtins_report_missing_catalog() {
        let error = QueryCatalog::new()
            .with_builtins(false)
            .load(SupportedLanguage::TypeScript)
            .expect_err("no catalog available");

        assert!(matches!(
            error,
            SyntaxError::CatalogNotFound {
                language: SupportedLanguage::TypeScript
            }
        ));
    }

    #[test]
    fn unreadable_override_reports_read_error() {
        let dir = TempDir::new().expect("temp dir");
        let root = utf8_dir(&dir);
        // A directory where the file should be cannot be read as text.
        std::fs::create_dir_all(root.join("rust").join(CATALOG_FILE_NAME))
            .expect("create blocking dir");

        let error = QueryCatalog::new()
            .with_search_path(root)
            .load(SupportedLanguage::Rust)
            .expect_err("read should fail");

        assert!(matches!(error, SyntaxError::CatalogReadError { .. }));
    }
}
