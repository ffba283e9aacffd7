// Error types for word construction and locale naming

/// Why a string could not become a [`Word`](crate::Word).
///
/// Every variant means "invalid word"; the split exists so callers and
/// logs can tell the cases apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// The input is empty or whitespace only.
    #[error("empty input")]
    Empty,

    /// The input tokenizes into zero or several word tokens.
    #[error("expected exactly one word token, found {count}")]
    TokenCount { count: usize },

    /// The single token is not a word (punctuation, whitespace, other).
    #[error("the token is not a word")]
    NotAWord,

    /// The single word token does not cover the whole trimmed input.
    #[error("the word token does not span the whole input")]
    PartialToken,

    /// No dominant language could be identified for the text.
    #[error("could not determine the language of the word")]
    UndeterminedLanguage,
}

/// Errors from the locale display-name helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// The language part of a known identifier has no display name.
    #[error("no display name for the language of locale {identifier:?}")]
    UnresolvedLanguage { identifier: String },
}
