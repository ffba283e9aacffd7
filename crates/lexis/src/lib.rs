//! Word-level convenience layer over pluggable linguistic services.
//!
//! A [`Word`] is a single word token bound to a language. Its lemma, part
//! of speech, name type, language guesses, spelling corrections,
//! completions and dictionary definition are all computed on demand by a
//! [`LinguisticServices`] provider shared behind an `Arc`.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lexis::{Language, Word};
//!
//! let services = lexis::bundled()?;
//! let word = Word::with_language(&services, "fundmntally", Language::ENGLISH)?;
//! assert_eq!(word.correcting_spelling().text(), "fundamentally");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`word`] -- the `Word` type and its validation
//! - [`definition`] -- dictionary entry parsing and formatting
//! - [`text`] -- words of a text, word enumeration, raw definitions
//! - [`locale`] -- locale display names
//! - [`error`] -- `WordError` and `LocaleError`
//!
//! With the default `lexicon` feature, [`bundled`] builds the
//! lexicon-backed reference provider from `lexis-lexicon`.

pub mod definition;
pub mod error;
pub mod locale;
pub mod text;
pub mod word;

#[cfg(test)]
mod testing;

pub use definition::{Definition, format_definition};
pub use error::{LocaleError, WordError};
pub use lexis_core::{
    Language, LanguageGuess, LinguisticServices, LocaleNames, NameType, NameTypeOrPartOfSpeech,
    PartOfSpeech,
};
pub use locale::{available_locales, display_name};
pub use text::{for_each_word, raw_definition, words};
pub use word::{Services, Word};

#[cfg(feature = "lexicon")]
pub use lexis_lexicon;

/// The reference provider over the embedded lexicons, ready to share.
#[cfg(feature = "lexicon")]
pub fn bundled() -> Result<Services, lexis_lexicon::LexiconError> {
    let services = lexis_lexicon::LexiconServices::new()?;
    Ok(std::sync::Arc::new(services))
}
