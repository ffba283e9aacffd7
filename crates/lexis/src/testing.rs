// Stub provider shared by the unit tests
//
// Whitespace/punctuation tokenization, an English word list, and fixed
// tag, correction and definition tables. No name joining.

use std::ops::Range;
use std::sync::Arc;

use lexis_core::{
    Language, LinguisticServices, Tag, TagScheme, TaggedSpan, Token, TokenType, TokenizeOptions,
};

use crate::Services;

pub(crate) const DICTIONARY: &[&str] = &[
    "the", "quick", "quickly", "quiet", "fox", "foxes", "fundamentally", "fundamental", "axiom",
    "ambiguous", "don't", "well-known",
];

pub(crate) const AXIOM: &str = "axiom | ˈaksēəm | noun 1 a statement or proposition which is \
    regarded as being established, accepted, or self-evidently true. 2 (in mathematics) a premise \
    or starting point of reasoning.";

#[derive(Default)]
pub(crate) struct StubServices {
    /// (word, scheme, tag) rows; words not listed get one untagged span.
    pub tags: Vec<(&'static str, TagScheme, &'static str)>,
    /// (misspelling, correction) rows.
    pub corrections: Vec<(&'static str, &'static str)>,
    /// (word, guesses) rows; guesses may deliberately be invalid words.
    pub guesses: Vec<(&'static str, Vec<&'static str>)>,
    pub definitions: Vec<(&'static str, &'static str)>,
}

impl StubServices {
    pub fn standard() -> Self {
        Self {
            tags: vec![
                ("fox", TagScheme::LexicalClass, "Noun"),
                ("fox", TagScheme::NameTypeOrLexicalClass, "Noun"),
                ("fox", TagScheme::Lemma, "fox"),
                ("foxes", TagScheme::Lemma, "fox"),
                ("foxes", TagScheme::LexicalClass, "Noun"),
                ("quickly", TagScheme::LexicalClass, "Adverb"),
                ("Paris", TagScheme::NameType, "PlaceName"),
                ("Paris", TagScheme::LexicalClass, "Noun"),
                ("Paris", TagScheme::NameTypeOrLexicalClass, "PlaceName"),
                ("Curie", TagScheme::NameType, "PersonalName"),
                ("Curie", TagScheme::NameTypeOrLexicalClass, "PersonalName"),
                ("zorp", TagScheme::LexicalClass, "Gibberish"),
            ],
            corrections: vec![("fundmntally", "fundamentally"), ("qiuck", "quick"), ("foxx", "fox es")],
            guesses: vec![
                ("qiuck", vec!["quick", "quack", "two words", ""]),
                ("fundmntally", vec!["fundamentally", "fundamental"]),
            ],
            definitions: vec![("axiom", AXIOM), ("hello", "hello | həˈlō | exclamation used as a greeting.")],
        }
    }

    pub fn shared() -> Services {
        Arc::new(Self::standard())
    }

    fn known(word: &str) -> bool {
        let lower = word.to_lowercase();
        DICTIONARY.contains(&lower.as_str())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-'
}

fn kind_of(c: char) -> TokenType {
    if is_word_char(c) {
        TokenType::Word
    } else if c.is_whitespace() {
        TokenType::Whitespace
    } else if c.is_ascii_punctuation() {
        TokenType::Punctuation
    } else {
        TokenType::Other
    }
}

impl LinguisticServices for StubServices {
    fn tokenize(&self, text: &str, options: TokenizeOptions) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        for (i, c) in text.char_indices() {
            let kind = kind_of(c);
            let end = i + c.len_utf8();
            match tokens.last_mut() {
                Some(last) if last.token_type == kind && kind != TokenType::Punctuation => last.span.end = end,
                _ => tokens.push(Token::new(kind, i..end)),
            }
        }
        tokens.retain(|t| options.keeps(t.token_type));
        tokens
    }

    fn identify_language(&self, text: &str) -> Option<Language> {
        if !text.chars().any(char::is_alphabetic) {
            None
        } else if text.contains(['ß', 'ä', 'ö', 'ü']) {
            Some(Language::GERMAN)
        } else if text.contains(['é', 'è', 'à', 'ç']) {
            Some(Language::FRENCH)
        } else {
            Some(Language::ENGLISH)
        }
    }

    fn language_hypotheses(&self, text: &str, max: usize) -> Vec<(Language, f64)> {
        if self.identify_language(text).is_none() {
            return Vec::new();
        }
        let mut found = vec![(Language::ENGLISH, 0.7), (Language::FRENCH, 0.2), (Language::GERMAN, 0.1)];
        found.truncate(max);
        // deliberately unordered
        found.reverse();
        found
    }

    fn tags(&self, text: &str, _language: &Language, scheme: TagScheme, span: Range<usize>) -> Vec<TaggedSpan> {
        let Some(slice) = text.get(span.clone()) else {
            return Vec::new();
        };
        if slice == "ambiguous" {
            return vec![
                TaggedSpan::new(Some(Tag::NOUN), span.start..span.start + 4),
                TaggedSpan::new(Some(Tag::VERB), span.start + 4..span.end),
            ];
        }
        let tag = self
            .tags
            .iter()
            .find(|(word, s, _)| *word == slice && *s == scheme)
            .map(|(_, _, tag)| Tag::new(*tag));
        vec![TaggedSpan::new(tag, span)]
    }

    fn check_spelling(&self, word: &str, language: &Language, start: usize) -> Option<Range<usize>> {
        if *language != Language::ENGLISH {
            return None;
        }
        let rest = word.get(start..)?;
        self.tokenize(rest, TokenizeOptions::default())
            .into_iter()
            .find(|t| t.text(rest).is_some_and(|w| !Self::known(w)))
            .map(|t| t.span.start + start..t.span.end + start)
    }

    fn correction(&self, word: &str, language: &Language) -> Option<String> {
        if *language != Language::ENGLISH {
            return None;
        }
        let lower = word.to_lowercase();
        self.corrections
            .iter()
            .find(|(typo, _)| *typo == lower)
            .map(|(_, fixed)| fixed.to_string())
    }

    fn guesses(&self, word: &str, language: &Language) -> Vec<String> {
        if *language != Language::ENGLISH {
            return Vec::new();
        }
        self.guesses
            .iter()
            .find(|(typo, _)| *typo == word)
            .map(|(_, found)| found.iter().map(|g| g.to_string()).collect())
            .unwrap_or_default()
    }

    fn completions(&self, prefix: &str, language: &Language) -> Vec<String> {
        if *language != Language::ENGLISH || prefix.is_empty() {
            return Vec::new();
        }
        DICTIONARY
            .iter()
            .filter(|w| w.starts_with(prefix) && **w != prefix)
            .map(|w| w.to_string())
            .collect()
    }

    fn definition(&self, word: &str) -> Option<String> {
        self.definitions
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, d)| d.to_string())
    }
}
