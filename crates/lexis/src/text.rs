// Text helpers: the words of a text, word enumeration, raw definitions

use std::ops::{ControlFlow, Range};

use lexis_core::{Language, TokenizeOptions};
use tracing::debug;

use crate::word::{Services, Word};

/// Identify the dominant language of `text`, if any.
fn dominant_language(services: &Services, text: &str) -> Option<Language> {
    services
        .identify_language(text)
        .filter(|l| !l.is_undetermined())
}

/// The words of `text` in source order.
///
/// Each token must make a word on its own, language detection included,
/// so tokens with no detectable language ("42") are skipped. The kept
/// words are then rebound to the dominant language of the whole text when
/// there is one.
pub fn words(services: &Services, text: &str) -> Vec<Word> {
    let language = dominant_language(services, text);
    services
        .tokenize(text, TokenizeOptions::default())
        .iter()
        .filter(|token| token.is_word())
        .filter_map(|token| token.text(text))
        .filter_map(|token| Word::new(services, token).ok())
        .map(|mut word| {
            if let Some(language) = &language {
                word.set_language(language.clone());
            }
            word
        })
        .collect()
}

/// Call `f` with the byte span and word of each word token inside `range`.
///
/// Spans are relative to the whole of `text`. Each word keeps the language
/// detected for it alone, and tokens with none are skipped. `f` stops the
/// enumeration by returning [`ControlFlow::Break`], whose value is passed
/// back. A range that is out of bounds or splits a character enumerates
/// nothing.
pub fn for_each_word<B>(
    services: &Services,
    text: &str,
    range: Range<usize>,
    mut f: impl FnMut(Range<usize>, Word) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let Some(slice) = text.get(range.clone()) else {
        debug!(?range, len = text.len(), "word enumeration range is not a valid slice");
        return ControlFlow::Continue(());
    };
    for token in services.tokenize(slice, TokenizeOptions::default()) {
        if !token.is_word() {
            continue;
        }
        let Some(word) = token.text(slice).and_then(|s| Word::new(services, s).ok()) else {
            continue;
        };
        f(range.start + token.span.start..range.start + token.span.end, word)?;
    }
    ControlFlow::Continue(())
}

/// The provider's unformatted dictionary entry for any string.
pub fn raw_definition(services: &Services, text: &str) -> Option<String> {
    services.definition(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AXIOM, StubServices};

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn sentence_words() {
        let services = StubServices::shared();
        let found = words(&services, "The quick fox.");
        assert_eq!(texts(&found), vec!["The", "quick", "fox"]);
        assert!(found.iter().all(|w| w.language() == &Language::ENGLISH));
    }

    #[test]
    fn words_share_the_dominant_language() {
        let services = StubServices::shared();
        let found = words(&services, "die Straße");
        assert_eq!(texts(&found), vec!["die", "Straße"]);
        assert!(found.iter().all(|w| w.language() == &Language::GERMAN));
    }

    #[test]
    fn undetectable_tokens_are_skipped() {
        let services = StubServices::shared();
        assert!(words(&services, "1, 2, 3").is_empty());
        assert!(words(&services, "").is_empty());
        assert_eq!(texts(&words(&services, "The 42 foxes")), vec!["The", "foxes"]);
    }

    #[test]
    fn enumerates_range_with_absolute_spans() {
        let services = StubServices::shared();
        let text = "The quick fox.";
        let mut seen = Vec::new();
        let flow: ControlFlow<()> = for_each_word(&services, text, 4..text.len(), |span, word| {
            seen.push((span, word.text().to_string()));
            ControlFlow::Continue(())
        });
        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(seen, vec![(4..9, "quick".to_string()), (10..13, "fox".to_string())]);
        assert_eq!(&text[4..9], "quick");
    }

    #[test]
    fn enumerated_words_detect_their_own_language() {
        let services = StubServices::shared();
        let text = "the fox and the école, 42";
        let mut seen = Vec::new();
        let _: ControlFlow<()> = for_each_word(&services, text, 0..text.len(), |_, word| {
            seen.push((word.text().to_string(), word.language().clone()));
            ControlFlow::Continue(())
        });
        assert_eq!(seen.len(), 5);
        assert_eq!(seen[1], ("fox".to_string(), Language::ENGLISH));
        assert_eq!(seen[4], ("école".to_string(), Language::FRENCH));
    }

    #[test]
    fn enumeration_stops_early() {
        let services = StubServices::shared();
        let text = "the quick fox";
        let mut calls = 0;
        let flow = for_each_word(&services, text, 0..text.len(), |span, word| {
            calls += 1;
            if word.text() == "quick" {
                ControlFlow::Break(span)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(4..9));
        assert_eq!(calls, 2);
    }

    #[test]
    fn invalid_range_enumerates_nothing() {
        let services = StubServices::shared();
        let mut calls = 0;
        let _: ControlFlow<()> = for_each_word(&services, "été", 0..1, |_, _| {
            calls += 1;
            ControlFlow::Continue(())
        });
        let _: ControlFlow<()> = for_each_word(&services, "fox", 0..10, |_, _| {
            calls += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn raw_definitions_pass_through() {
        let services = StubServices::shared();
        assert_eq!(raw_definition(&services, "axiom").as_deref(), Some(AXIOM));
        assert_eq!(raw_definition(&services, "quiet"), None);
    }
}
