// Shared enums: TokenType, TagScheme, SpellResult, LocaleComponent

use serde::{Deserialize, Serialize};

/// Kind of a token produced by a provider's word tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Word token (letters, digits, joined contractions and names).
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Anything else (symbols, emoji, unknown characters).
    Other,
}

impl TokenType {
    /// Stable label, matching the provider tag vocabulary for token types.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Word => "Word",
            TokenType::Punctuation => "Punctuation",
            TokenType::Whitespace => "Whitespace",
            TokenType::Other => "Other",
        }
    }
}

/// Tagging schemes a provider can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagScheme {
    /// Lexical class (part of speech).
    LexicalClass,
    /// Named-entity class; only name tags are produced.
    NameType,
    /// Name tag when the token is part of a name, lexical class otherwise.
    NameTypeOrLexicalClass,
    /// Dictionary form of the token. Tag values are lemma strings.
    Lemma,
}

/// Result of looking a single word up in a speller.
///
/// Ordered from best to worst so that results can be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// Word is correctly spelled.
    Ok,
    /// Word is correct if the first letter is capitalized.
    CapitalizeFirst,
    /// Word exists but its capitalization is wrong.
    CapitalizationError,
    /// Word is misspelled.
    Failed,
}

/// Subcomponent of a locale identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleComponent {
    Language,
    Script,
    Region,
    Variant,
}
