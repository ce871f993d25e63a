//! Mapping from editor language identifiers to grammars.
//!
//! Editors name languages with their own identifiers (`rust`,
//! `javascriptreact`, `python3`, ...). The registry is assembled once at
//! start-up through [`LanguageRegistryBuilder`] and is read-only afterwards.

use std::collections::HashMap;

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;

const DEFAULT_ALIASES: &[(&str, SupportedLanguage)] = &[
    ("rust", SupportedLanguage::Rust),
    ("python", SupportedLanguage::Python),
    ("python3", SupportedLanguage::Python),
    ("typescript", SupportedLanguage::TypeScript),
    ("typescriptreact", SupportedLanguage::TypeScript),
    ("javascript", SupportedLanguage::TypeScript),
    ("javascriptreact", SupportedLanguage::TypeScript),
];

/// Frozen mapping from editor language identifiers to grammars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    aliases: HashMap<String, SupportedLanguage>,
}

impl LanguageRegistry {
    /// Starts a builder seeded with the default identifiers.
    #[must_use]
    pub fn builder() -> LanguageRegistryBuilder {
        LanguageRegistryBuilder::new()
    }

    /// Resolves an editor language identifier. Matching ignores ASCII case
    /// and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::NoGrammarMapping`] when the identifier is not
    /// registered.
    pub fn resolve(&self, language_id: &str) -> Result<SupportedLanguage, SyntaxError> {
        self.aliases
            .get(&normalise(language_id))
            .copied()
            .ok_or_else(|| SyntaxError::no_grammar_mapping(language_id))
    }

    /// Returns the number of registered identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns whether no identifiers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        LanguageRegistryBuilder::new().build()
    }
}

/// Collects identifier registrations before the registry is frozen.
#[derive(Debug, Clone)]
pub struct LanguageRegistryBuilder {
    aliases: HashMap<String, SupportedLanguage>,
}

impl LanguageRegistryBuilder {
    fn new() -> Self {
        let aliases = DEFAULT_ALIASES
            .iter()
            .map(|(id, language)| ((*id).to_owned(), *language))
            .collect();
        Self { aliases }
    }

    /// Starts a builder with no identifiers at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Maps `language_id` to `language`, replacing any earlier mapping.
    #[must_use]
    pub fn register(mut self, language_id: &str, language: SupportedLanguage) -> Self {
        self.aliases.insert(normalise(language_id), language);
        self
    }

    /// Registers every pair in `aliases`.
    #[must_use]
    pub fn register_all<I, S>(self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (S, SupportedLanguage)>,
        S: AsRef<str>,
    {
        aliases
            .into_iter()
            .fold(self, |builder, (id, language)| {
                builder.register(id.as_ref(), language)
            })
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> LanguageRegistry {
        LanguageRegistry {
            aliases: self.aliases,
        }
    }
}

fn normalise(language_id: &str) -> String {
    language_id.trim().to_ascii_lowercase()
}
