// Word: a validated single-token string bound to a language
//
// A word owns its text and language plus a shared handle to the linguistic
// services. Every derived property is a fresh provider call over the
// current text and language; nothing is cached, so changing the language
// or correcting the spelling can never leave stale state behind.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use lexis_core::{
    Language, LanguageGuess, LinguisticServices, NameType, NameTypeOrPartOfSpeech, PartOfSpeech,
    Tag, TagScheme, TokenizeOptions,
};
use tracing::{debug, warn};

use crate::definition::Definition;
use crate::error::WordError;

/// Shared handle to the linguistic services a [`Word`] delegates to.
pub type Services = Arc<dyn LinguisticServices>;

/// Check that `text` is exactly one word token and return that token.
///
/// The input is trimmed first; the single word token must then cover the
/// whole trimmed string.
pub(crate) fn validate<'a>(services: &dyn LinguisticServices, text: &'a str) -> Result<&'a str, WordError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(WordError::Empty);
    }
    let tokens = services.tokenize(trimmed, TokenizeOptions::default());
    let [token] = tokens.as_slice() else {
        return Err(WordError::TokenCount { count: tokens.len() });
    };
    if !token.is_word() {
        return Err(WordError::NotAWord);
    }
    if token.span != (0..trimmed.len()) {
        return Err(WordError::PartialToken);
    }
    Ok(trimmed)
}

/// A single word token bound to a language.
///
/// Construction goes through the provider's tokenizer, so a `Word` always
/// holds exactly one word token as the provider sees it: `"don't"` and
/// `"New York"` are words when the provider joins contractions and names,
/// `"hello world"` and `"."` are not.
///
/// Equality and hashing consider the text and the language only.
#[derive(Clone)]
pub struct Word {
    text: String,
    language: Language,
    services: Services,
}

impl Word {
    /// Create a word, identifying its language from the text alone.
    ///
    /// Fails when the text is not a single word token, or when the provider
    /// cannot name a dominant language for it.
    pub fn new(services: &Services, text: &str) -> Result<Self, WordError> {
        let text = validate(services.as_ref(), text).inspect_err(|err| {
            debug!(input = text, %err, "rejected word");
        })?;
        let Some(language) = services.identify_language(text).filter(|l| !l.is_undetermined()) else {
            debug!(input = text, "rejected word: no dominant language");
            return Err(WordError::UndeterminedLanguage);
        };
        Ok(Self {
            text: text.to_string(),
            language,
            services: Arc::clone(services),
        })
    }

    /// Create a word bound to `language`. No language identification runs.
    pub fn with_language(services: &Services, text: &str, language: Language) -> Result<Self, WordError> {
        let text = validate(services.as_ref(), text).inspect_err(|err| {
            debug!(input = text, %language, %err, "rejected word");
        })?;
        Ok(Self {
            text: text.to_string(),
            language,
            services: Arc::clone(services),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Rebind the word to another language. The text is left as is.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The services this word queries.
    pub fn services(&self) -> &Services {
        &self.services
    }

    // -----------------------------------------------------------------------
    // Derived properties
    // -----------------------------------------------------------------------

    /// The single tag the provider reports over the whole word, if exactly
    /// one tagged span comes back.
    fn single_tag(&self, scheme: TagScheme) -> Option<Tag> {
        let mut spans = self
            .services
            .tags(&self.text, &self.language, scheme, 0..self.text.len());
        if spans.len() != 1 {
            return None;
        }
        spans.pop().and_then(|span| span.tag)
    }

    /// The dictionary form of the word.
    pub fn lemma(&self) -> Option<String> {
        self.single_tag(TagScheme::Lemma).map(Tag::into_string)
    }

    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        self.single_tag(TagScheme::LexicalClass)
            .and_then(|tag| PartOfSpeech::from_tag(&tag))
    }

    /// The named-entity class of the word, `None` unless it is part of a name.
    pub fn name_type(&self) -> Option<NameType> {
        self.single_tag(TagScheme::NameType)
            .and_then(|tag| NameType::from_tag(&tag))
    }

    /// The name type when the word is part of a name, the part of speech
    /// otherwise.
    pub fn name_type_or_part_of_speech(&self) -> Option<NameTypeOrPartOfSpeech> {
        self.single_tag(TagScheme::NameTypeOrLexicalClass)
            .and_then(|tag| NameTypeOrPartOfSpeech::from_tag(&tag))
    }

    /// Best language guess for the text alone, ignoring the bound language.
    pub fn language_guess(&self) -> Option<Language> {
        self.services
            .identify_language(&self.text)
            .filter(|l| !l.is_undetermined())
    }

    /// Up to `max` language guesses, highest confidence first.
    ///
    /// Confidences are percentages in `[0, 100]`. Hypotheses with a
    /// non-finite probability are dropped.
    pub fn language_guesses(&self, max: usize) -> Vec<LanguageGuess> {
        if max == 0 {
            return Vec::new();
        }
        let mut guesses: Vec<LanguageGuess> = self
            .services
            .language_hypotheses(&self.text, max)
            .into_iter()
            .filter(|(_, probability)| probability.is_finite())
            .map(|(language, probability)| LanguageGuess::from_probability(language, probability))
            .collect();
        guesses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        guesses.truncate(max);
        guesses
    }

    // -----------------------------------------------------------------------
    // Spell checking
    // -----------------------------------------------------------------------

    pub fn is_spelled_correctly(&self) -> bool {
        self.services
            .check_spelling(&self.text, &self.language, 0)
            .is_none()
    }

    /// Replace the text with the provider's best correction.
    ///
    /// Returns whether the text changed. A correction that is not itself a
    /// single word is ignored.
    pub fn correct_spelling(&mut self) -> bool {
        let Some(correction) = self.services.correction(&self.text, &self.language) else {
            return false;
        };
        match validate(self.services.as_ref(), &correction) {
            Ok(text) if text != self.text => {
                self.text = text.to_string();
                true
            }
            Ok(_) => false,
            Err(err) => {
                warn!(word = %self.text, %correction, %err, "provider correction is not a single word, ignored");
                false
            }
        }
    }

    /// A corrected copy of the word; `self` is untouched.
    pub fn correcting_spelling(&self) -> Word {
        let mut corrected = self.clone();
        corrected.correct_spelling();
        corrected
    }

    /// Ranked spelling guesses, each bound to this word's language.
    pub fn spell_check_guesses(&self) -> Vec<Word> {
        let guesses = self.services.guesses(&self.text, &self.language);
        self.wrap_candidates(guesses, "guess")
    }

    /// Ranked completions of this word used as a prefix.
    pub fn completions(&self) -> Vec<Word> {
        let completions = self.services.completions(&self.text, &self.language);
        self.wrap_candidates(completions, "completion")
    }

    fn wrap_candidates(&self, candidates: Vec<String>, kind: &'static str) -> Vec<Word> {
        candidates
            .into_iter()
            .filter_map(|candidate| {
                match Word::with_language(&self.services, &candidate, self.language.clone()) {
                    Ok(word) => Some(word),
                    Err(err) => {
                        warn!(word = %self.text, %candidate, kind, %err, "provider candidate is not a single word, dropped");
                        None
                    }
                }
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Definitions
    // -----------------------------------------------------------------------

    /// The dictionary entry for the word, parsed into its sections.
    pub fn parsed_definition(&self) -> Option<Definition> {
        let raw = self.services.definition(&self.text)?;
        Definition::parse(&self.text, &raw)
    }

    /// The dictionary entry for the word, formatted for display.
    ///
    /// `None` when the provider has no entry or the entry does not have
    /// the headword / part of speech / senses shape.
    pub fn definition(&self) -> Option<String> {
        self.parsed_definition().map(|d| d.to_string())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Word")
            .field("text", &self.text)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.language == other.language
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.language.hash(state);
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubServices;

    fn word(text: &str) -> Word {
        Word::with_language(&StubServices::shared(), text, Language::ENGLISH).unwrap()
    }

    // -- Construction --

    #[test]
    fn accepts_single_word() {
        let services = StubServices::shared();
        let w = Word::new(&services, "fox").unwrap();
        assert_eq!(w.text(), "fox");
        assert_eq!(w.language(), &Language::ENGLISH);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(word("  quick\n").text(), "quick");
    }

    #[test]
    fn contractions_and_compounds_are_single_words() {
        assert_eq!(word("don't").text(), "don't");
        assert_eq!(word("well-known").text(), "well-known");
    }

    #[test]
    fn rejects_empty() {
        let services = StubServices::shared();
        assert_eq!(Word::new(&services, "").unwrap_err(), WordError::Empty);
        assert_eq!(Word::new(&services, " \t ").unwrap_err(), WordError::Empty);
    }

    #[test]
    fn rejects_several_tokens() {
        let services = StubServices::shared();
        assert_eq!(
            Word::with_language(&services, "hello world", Language::ENGLISH).unwrap_err(),
            WordError::TokenCount { count: 2 }
        );
    }

    #[test]
    fn rejects_input_without_word_tokens() {
        let services = StubServices::shared();
        assert_eq!(
            Word::new(&services, "...").unwrap_err(),
            WordError::TokenCount { count: 0 }
        );
    }

    #[test]
    fn rejects_trailing_punctuation() {
        // "fox." is one word token that does not cover the input
        let services = StubServices::shared();
        assert_eq!(
            Word::with_language(&services, "fox.", Language::ENGLISH).unwrap_err(),
            WordError::PartialToken
        );
    }

    #[test]
    fn auto_detection_needs_a_language() {
        let services = StubServices::shared();
        assert_eq!(Word::new(&services, "42").unwrap_err(), WordError::UndeterminedLanguage);
        // explicit language never fails on identification
        assert_eq!(Word::with_language(&services, "42", Language::ENGLISH).unwrap().text(), "42");
    }

    #[test]
    fn detects_language_from_text() {
        let services = StubServices::shared();
        assert_eq!(Word::new(&services, "Straße").unwrap().language(), &Language::GERMAN);
        assert_eq!(Word::new(&services, "école").unwrap().language(), &Language::FRENCH);
    }

    #[test]
    fn tokenization_is_idempotent() {
        let services = StubServices::shared();
        for text in ["fox", "don't", "Straße", "42"] {
            let w = Word::with_language(&services, text, Language::ENGLISH).unwrap();
            assert_eq!(w.text(), text);
        }
    }

    #[test]
    fn language_override_keeps_text() {
        let mut w = word("fox");
        w.set_language(Language::FRENCH);
        assert_eq!(w.text(), "fox");
        assert_eq!(w.language(), &Language::FRENCH);
    }

    // -- Derived properties --

    #[test]
    fn tag_properties() {
        assert_eq!(word("foxes").lemma().as_deref(), Some("fox"));
        assert_eq!(word("fox").part_of_speech(), Some(PartOfSpeech::Noun));
        assert_eq!(word("quickly").part_of_speech(), Some(PartOfSpeech::Adverb));
        assert_eq!(
            word("fox").name_type_or_part_of_speech(),
            Some(NameTypeOrPartOfSpeech::PartOfSpeech(PartOfSpeech::Noun))
        );
    }

    #[test]
    fn name_type_reads_the_name_scheme() {
        assert_eq!(word("Paris").name_type(), Some(NameType::PlaceName));
        assert_eq!(word("Paris").part_of_speech(), Some(PartOfSpeech::Noun));
        assert_eq!(
            word("Curie").name_type_or_part_of_speech(),
            Some(NameTypeOrPartOfSpeech::NameType(NameType::PersonalName))
        );
        assert_eq!(word("fox").name_type(), None);
    }

    #[test]
    fn unknown_properties_are_none() {
        let w = word("quiet");
        assert_eq!(w.lemma(), None);
        assert_eq!(w.part_of_speech(), None);
        assert_eq!(w.name_type_or_part_of_speech(), None);
    }

    #[test]
    fn ambiguous_tagging_is_unknown() {
        assert_eq!(word("ambiguous").part_of_speech(), None);
        assert_eq!(word("ambiguous").lemma(), None);
    }

    #[test]
    fn unmapped_tag_is_unknown() {
        assert_eq!(word("zorp").part_of_speech(), None);
    }

    #[test]
    fn language_guess_ignores_bound_language() {
        let mut w = word("école");
        w.set_language(Language::ENGLISH);
        assert_eq!(w.language_guess(), Some(Language::FRENCH));
    }

    #[test]
    fn language_guesses_sorted_and_bounded() {
        let w = word("fox");
        let guesses = w.language_guesses(2);
        assert_eq!(guesses.len(), 2);
        assert_eq!(guesses[0].language, Language::ENGLISH);
        assert!((guesses[0].confidence - 70.0).abs() < 1e-9);
        assert!(guesses.windows(2).all(|p| p[0].confidence >= p[1].confidence));
        assert!(guesses.iter().all(|g| (0.0..=100.0).contains(&g.confidence)));
        assert_eq!(w.language_guesses(10).len(), 3);
        assert!(w.language_guesses(0).is_empty());
    }

    // -- Spell checking --

    #[test]
    fn spelling_status() {
        assert!(word("fox").is_spelled_correctly());
        assert!(!word("fundmntally").is_spelled_correctly());
    }

    #[test]
    fn fundmntally_is_corrected() {
        let original = word("fundmntally");
        let corrected = original.correcting_spelling();
        assert_eq!(corrected.text(), "fundamentally");
        assert_eq!(corrected.language(), &Language::ENGLISH);
        assert_eq!(original.text(), "fundmntally");
    }

    #[test]
    fn no_correction_leaves_word_unchanged() {
        let mut w = word("fundmntally");
        w.set_language(Language::FRENCH);
        assert!(!w.correct_spelling());
        assert_eq!(w.text(), "fundmntally");
    }

    #[test]
    fn correct_word_is_a_fixed_point() {
        let w = word("quick");
        assert!(w.is_spelled_correctly());
        assert_eq!(w.correcting_spelling().text(), w.text());
    }

    #[test]
    fn invalid_correction_is_ignored() {
        // the stub corrects "foxx" to two words
        let mut w = word("foxx");
        assert!(!w.correct_spelling());
        assert_eq!(w.text(), "foxx");
    }

    #[test]
    fn guesses_drop_invalid_candidates() {
        let guesses: Vec<String> = word("qiuck").spell_check_guesses().iter().map(Word::to_string).collect();
        assert_eq!(guesses, vec!["quick", "quack"]);
        assert!(word("qiuck").spell_check_guesses().iter().all(|g| g.language() == &Language::ENGLISH));
    }

    #[test]
    fn completions_keep_language() {
        let found = word("qui").completions();
        let texts: Vec<&str> = found.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["quick", "quickly", "quiet"]);
        assert!(found.iter().all(|w| w.language() == &Language::ENGLISH));
    }

    // -- Definitions and traits --

    #[test]
    fn formatted_definition() {
        let rendered = word("axiom").definition().unwrap();
        assert!(rendered.starts_with("axiom\n | ˈaksēəm |\n noun\n\t1. a statement"));
        assert!(rendered.contains("\n\t2. (in mathematics) a premise"));
        assert_eq!(word("axiom").parsed_definition().unwrap().senses.len(), 2);
    }

    #[test]
    fn definition_without_part_of_speech_is_none() {
        assert_eq!(word("hello").definition(), None);
        assert_eq!(word("fox").definition(), None);
    }

    #[test]
    fn equality_display_and_debug() {
        assert_eq!(word("fox"), word("fox"));
        let mut fr = word("fox");
        fr.set_language(Language::FRENCH);
        assert_ne!(word("fox"), fr);
        assert_eq!(word("fox").to_string(), "fox");
        assert!(format!("{:?}", word("fox")).starts_with("Word { text: \"fox\", language: "));
    }

    #[test]
    fn words_move_across_threads() {
        let w = word("fox");
        let handle = std::thread::spawn(move || w.part_of_speech());
        assert_eq!(handle.join().unwrap(), Some(PartOfSpeech::Noun));
    }
}
