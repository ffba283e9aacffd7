//! Shared types for the lexis word layer.
//!
//! This crate holds everything both sides of the provider seam need to
//! agree on: language identifiers, tokens, tag schemes and tag values, the
//! closed part-of-speech / name-type vocabularies, and the provider traits
//! themselves.
//!
//! # Modules
//!
//! - [`enums`] -- token types, tag schemes, spell results
//! - [`token`] -- tokens and tokenizer options
//! - [`language`] -- language identifiers and guesses
//! - [`tag`] -- provider tag values and the public tag vocabularies
//! - [`character`] -- character classification used by tokenizers
//! - [`case`] -- case pattern detection and conversion
//! - [`locale`] -- locale identifier decomposition
//! - [`services`] -- the `LinguisticServices` and `LocaleNames` traits

pub mod case;
pub mod character;
pub mod enums;
pub mod language;
pub mod locale;
pub mod services;
pub mod tag;
pub mod token;

pub use enums::{LocaleComponent, SpellResult, TagScheme, TokenType};
pub use language::{Language, LanguageGuess, ParseLanguageError};
pub use locale::LocaleComponents;
pub use services::{LinguisticServices, LocaleNames, TaggedSpan};
pub use tag::{NameType, NameTypeOrPartOfSpeech, PartOfSpeech, Tag};
pub use token::{Token, TokenizeOptions};
