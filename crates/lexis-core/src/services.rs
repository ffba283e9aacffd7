// Provider traits: linguistic services and locale names

use std::ops::Range;

use crate::enums::{LocaleComponent, TagScheme};
use crate::language::Language;
use crate::locale::LocaleComponents;
use crate::tag::Tag;
use crate::token::{Token, TokenizeOptions};

/// A span reported by a tagger, with the tag it carries (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    pub tag: Option<Tag>,
    /// Byte range into the tagged text.
    pub span: Range<usize>,
}

impl TaggedSpan {
    pub fn new(tag: Option<Tag>, span: Range<usize>) -> Self {
        Self { tag, span }
    }
}

// ---------------------------------------------------------------------------
// LinguisticServices
// ---------------------------------------------------------------------------

/// The linguistic services a `Word` delegates to.
///
/// Implementations must be shareable across threads and must not carry
/// per-call session state: every method is a pure function of its
/// arguments and the provider's (immutable) data.
///
/// All ranges are byte ranges into the text passed to the call.
pub trait LinguisticServices: Send + Sync {
    /// Split `text` into tokens according to `options`.
    fn tokenize(&self, text: &str, options: TokenizeOptions) -> Vec<Token>;

    /// The dominant language of `text`, or `None` when it cannot be
    /// determined.
    fn identify_language(&self, text: &str) -> Option<Language>;

    /// Up to `max` language hypotheses for `text` with probabilities in
    /// `[0, 1]`. Ordering is not guaranteed.
    fn language_hypotheses(&self, text: &str, max: usize) -> Vec<(Language, f64)>;

    /// Tags in `scheme` for the word tokens inside `span` of `text`,
    /// interpreted as `language`.
    fn tags(
        &self,
        text: &str,
        language: &Language,
        scheme: TagScheme,
        span: Range<usize>,
    ) -> Vec<TaggedSpan>;

    /// The first misspelled range in `word` at or after byte `start`, or
    /// `None` if nothing is misspelled.
    fn check_spelling(&self, word: &str, language: &Language, start: usize) -> Option<Range<usize>>;

    /// The single best correction for `word`, if the provider has one.
    fn correction(&self, word: &str, language: &Language) -> Option<String>;

    /// Ranked spelling guesses for `word`, best first.
    fn guesses(&self, word: &str, language: &Language) -> Vec<String>;

    /// Ranked completions of `prefix`, best first.
    fn completions(&self, prefix: &str, language: &Language) -> Vec<String>;

    /// Raw, unformatted dictionary text for `word`, in any language the
    /// provider knows.
    fn definition(&self, word: &str) -> Option<String>;
}

// ---------------------------------------------------------------------------
// LocaleNames
// ---------------------------------------------------------------------------

/// Display-name tables for locale components.
pub trait LocaleNames: Send + Sync {
    /// The name of `code` (a language, script, region or variant code) as
    /// written in `in_locale`.
    fn display_name(&self, component: LocaleComponent, code: &str, in_locale: &str) -> Option<String>;

    /// Split a locale identifier into its components.
    fn decompose(&self, identifier: &str) -> LocaleComponents {
        LocaleComponents::parse(identifier)
    }

    /// Every locale identifier the tables know about.
    fn available_identifiers(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Names;

    impl LocaleNames for Names {
        fn display_name(&self, component: LocaleComponent, code: &str, _in_locale: &str) -> Option<String> {
            match (component, code) {
                (LocaleComponent::Language, "en") => Some("English".to_string()),
                _ => None,
            }
        }

        fn available_identifiers(&self) -> Vec<String> {
            vec!["en".to_string()]
        }
    }

    #[test]
    fn default_decompose_parses_identifier() {
        let c = Names.decompose("en_GB");
        assert_eq!(c.language.as_deref(), Some("en"));
        assert_eq!(c.region.as_deref(), Some("GB"));
    }

    #[test]
    fn locale_names_is_object_safe() {
        let names: Arc<dyn LocaleNames> = Arc::new(Names);
        assert_eq!(
            names.display_name(LocaleComponent::Language, "en", "en").as_deref(),
            Some("English")
        );
        assert_eq!(names.available_identifiers(), vec!["en"]);
    }

    #[test]
    fn tagged_span_new() {
        let t = TaggedSpan::new(Some(Tag::NOUN), 0..3);
        assert_eq!(t.tag, Some(Tag::NOUN));
        assert_eq!(t.span, 0..3);
    }
}
