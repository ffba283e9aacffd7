// Token and tokenizer option types

use std::ops::Range;

use crate::enums::TokenType;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A token produced by a provider's word tokenizer.
///
/// The span is a byte range into the text that was tokenized, so
/// `&text[token.span.clone()]` is always the token's exact substring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The kind of this token.
    pub token_type: TokenType,

    /// Byte range of the token in the tokenized text.
    pub span: Range<usize>,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, span: Range<usize>) -> Self {
        Self { token_type, span }
    }

    /// Shorthand for a word token.
    pub fn word(span: Range<usize>) -> Self {
        Self::new(TokenType::Word, span)
    }

    /// The token's substring of `text`.
    ///
    /// Returns `None` if the span does not fall on character boundaries of
    /// `text` (i.e. the token was produced for a different string).
    pub fn text<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.span.clone())
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Whether the token covers no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }
}

// ---------------------------------------------------------------------------
// TokenizeOptions
// ---------------------------------------------------------------------------

/// Options controlling word tokenization.
///
/// `Default` is the fixed option set every `Word` is validated with:
/// contractions and multi-word names are joined, and punctuation,
/// whitespace and other tokens are omitted from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenizeOptions {
    /// Keep contractions such as "don't" as one token.
    pub join_contractions: bool,
    /// Keep multi-word names such as "New York" as one token.
    pub join_names: bool,
    /// Drop `TokenType::Other` tokens.
    pub omit_other: bool,
    /// Drop `TokenType::Punctuation` tokens.
    pub omit_punctuation: bool,
    /// Drop `TokenType::Whitespace` tokens.
    pub omit_whitespace: bool,
}

impl TokenizeOptions {
    /// Options that keep every token and join nothing.
    pub const ALL_TOKENS: Self = Self {
        join_contractions: false,
        join_names: false,
        omit_other: false,
        omit_punctuation: false,
        omit_whitespace: false,
    };

    /// Whether a token of this type survives the omit flags.
    pub fn keeps(&self, token_type: TokenType) -> bool {
        match token_type {
            TokenType::Word => true,
            TokenType::Punctuation => !self.omit_punctuation,
            TokenType::Whitespace => !self.omit_whitespace,
            TokenType::Other => !self.omit_other,
        }
    }
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            join_contractions: true,
            join_names: true,
            omit_other: true,
            omit_punctuation: true,
            omit_whitespace: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_text_slices_source() {
        let text = "The fox";
        let tok = Token::word(4..7);
        assert_eq!(tok.text(text), Some("fox"));
        assert_eq!(tok.len(), 3);
        assert!(tok.is_word());
    }

    #[test]
    fn token_text_rejects_split_character() {
        // "é" is two bytes; 0..1 splits it
        let tok = Token::word(0..1);
        assert_eq!(tok.text("été"), None);
    }

    #[test]
    fn empty_token() {
        let tok = Token::new(TokenType::Other, 3..3);
        assert!(tok.is_empty());
    }

    #[test]
    fn default_options_keep_only_words() {
        let opts = TokenizeOptions::default();
        assert!(opts.join_contractions);
        assert!(opts.join_names);
        assert!(opts.keeps(TokenType::Word));
        assert!(!opts.keeps(TokenType::Punctuation));
        assert!(!opts.keeps(TokenType::Whitespace));
        assert!(!opts.keeps(TokenType::Other));
    }

    #[test]
    fn all_tokens_keeps_everything() {
        let opts = TokenizeOptions::ALL_TOKENS;
        assert!(opts.keeps(TokenType::Whitespace));
        assert!(opts.keeps(TokenType::Punctuation));
        assert!(opts.keeps(TokenType::Other));
    }
}
