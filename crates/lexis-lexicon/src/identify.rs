// Language identification from script counts and lexicon evidence
//
// Letters in scripts used by a single language in the bundled set (Hebrew,
// Greek, Thai, ...) vote for that language directly. Latin letters are
// shared out among the Latin-script languages in proportion to how many
// tokens each lexicon recognizes, plus a small bonus for diacritics that
// are characteristic of a language.

use hashbrown::HashMap;
use lexis_core::character::{script_of, Script};
use lexis_core::{Language, TokenType, TokenizeOptions};

use crate::lexicon::Lexicon;
use crate::tokenizer;

/// Evidence added per characteristic diacritic.
const DIACRITIC_WEIGHT: f64 = 0.5;

const DIACRITIC_HINTS: [(Language, &str); 4] = [
    (Language::FRENCH, "éèêëàâçîïôûùœÉÈÊÀÇ"),
    (Language::GERMAN, "äöüßÄÖÜ"),
    (Language::SPANISH, "ñ¿¡áíóúÑ"),
    (Language::PORTUGUESE, "ãõÃÕ"),
];

/// Language of a non-Latin script, when a single language is assumed.
fn script_language(script: Script, has_kana: bool) -> Option<Language> {
    let language = match script {
        Script::Latin => return None,
        Script::Greek => Language::GREEK,
        Script::Cyrillic => Language::RUSSIAN,
        Script::Hebrew => Language::HEBREW,
        Script::Arabic => Language::ARABIC,
        Script::Devanagari => Language::HINDI,
        Script::Thai => Language::THAI,
        Script::Hangul => Language::KOREAN,
        Script::Kana => Language::JAPANESE,
        Script::Han if has_kana => Language::JAPANESE,
        Script::Han => Language::CHINESE,
    };
    Some(language)
}

/// How strongly a lexicon hit counts: frequent words slightly more.
fn token_weight(rank: Option<u32>) -> f64 {
    match rank {
        Some(rank) => 1.0 + 1.0 / (1.0 + f64::from(rank)),
        None => 1.0,
    }
}

/// Language hypotheses for `text`, most probable first, probabilities
/// summing to 1. Empty when `text` has no letters or no evidence.
///
/// `fallback` receives the Latin-script share when no lexicon recognizes
/// anything and no diacritic hints apply.
pub fn hypotheses(text: &str, lexicons: &[Lexicon], fallback: Option<&Language>) -> Vec<(Language, f64)> {
    let mut script_counts: HashMap<Script, usize> = HashMap::new();
    for c in text.chars() {
        if let Some(script) = script_of(c) {
            *script_counts.entry(script).or_insert(0) += 1;
        }
    }
    let total_letters: usize = script_counts.values().sum();
    if total_letters == 0 {
        return Vec::new();
    }

    let has_kana = script_counts.contains_key(&Script::Kana);
    let mut weights: HashMap<Language, f64> = HashMap::new();
    for (&script, &count) in &script_counts {
        if let Some(language) = script_language(script, has_kana) {
            *weights.entry(language).or_insert(0.0) += count as f64;
        }
    }

    let latin = script_counts.get(&Script::Latin).copied().unwrap_or(0);
    if latin > 0 {
        let evidence = latin_evidence(text, lexicons);
        let total_evidence: f64 = evidence.values().sum();
        if total_evidence > 0.0 {
            for (language, score) in evidence {
                *weights.entry(language).or_insert(0.0) += latin as f64 * score / total_evidence;
            }
        } else if let Some(fallback) = fallback {
            *weights.entry(fallback.clone()).or_insert(0.0) += latin as f64;
        }
    }

    let total: f64 = weights.values().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut result: Vec<(Language, f64)> = weights
        .into_iter()
        .map(|(language, weight)| (language, weight / total))
        .collect();
    result.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    result
}

/// Per-language evidence from Latin-script word tokens.
fn latin_evidence(text: &str, lexicons: &[Lexicon]) -> HashMap<Language, f64> {
    let mut evidence: HashMap<Language, f64> = HashMap::new();

    let options = TokenizeOptions {
        join_names: false,
        ..TokenizeOptions::default()
    };
    for token in tokenizer::tokenize(text, options, None) {
        if token.token_type != TokenType::Word {
            continue;
        }
        let Some(word) = token.text(text) else {
            continue;
        };
        if !word.chars().any(|c| script_of(c) == Some(Script::Latin)) {
            continue;
        }
        for lexicon in lexicons {
            if let Some(entry) = lexicon.lookup(word) {
                *evidence.entry(lexicon.language().clone()).or_insert(0.0) += token_weight(entry.rank);
            }
        }
    }

    for c in text.chars() {
        for (language, marks) in &DIACRITIC_HINTS {
            if marks.contains(c) {
                *evidence.entry(language.clone()).or_insert(0.0) += DIACRITIC_WEIGHT;
            }
        }
    }
    evidence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicons() -> Vec<Lexicon> {
        vec![
            Lexicon::from_json(
                r#"{"language": "en", "entries": [
                    {"form": "the", "rank": 1}, {"form": "fox"}, {"form": "quick"},
                    {"form": "Paris", "name": "PlaceName"}]}"#,
            )
            .unwrap(),
            Lexicon::from_json(
                r#"{"language": "fr", "entries": [
                    {"form": "le", "rank": 1}, {"form": "renard"},
                    {"form": "Paris", "name": "PlaceName"}]}"#,
            )
            .unwrap(),
        ]
    }

    fn top(text: &str) -> Option<Language> {
        hypotheses(text, &lexicons(), Some(&Language::ENGLISH))
            .into_iter()
            .next()
            .map(|(l, _)| l)
    }

    #[test]
    fn lexicon_evidence_decides_latin_text() {
        assert_eq!(top("The quick fox"), Some(Language::ENGLISH));
        assert_eq!(top("Le renard"), Some(Language::FRENCH));
    }

    #[test]
    fn unique_scripts() {
        assert_eq!(top("שלום עולם"), Some(Language::HEBREW));
        assert_eq!(top("Привет мир"), Some(Language::RUSSIAN));
        assert_eq!(top("Καλημέρα"), Some(Language::GREEK));
        assert_eq!(top("안녕하세요"), Some(Language::KOREAN));
        assert_eq!(top("สวัสดี"), Some(Language::THAI));
    }

    #[test]
    fn han_with_and_without_kana() {
        assert_eq!(top("中文"), Some(Language::CHINESE));
        assert_eq!(top("漢字とひらがな"), Some(Language::JAPANESE));
    }

    #[test]
    fn diacritics_hint_without_lexicon() {
        assert_eq!(top("mañana"), Some(Language::SPANISH));
        assert_eq!(top("Straße"), Some(Language::GERMAN));
    }

    #[test]
    fn fallback_for_unknown_latin() {
        assert_eq!(top("xyzzy"), Some(Language::ENGLISH));
        assert!(hypotheses("xyzzy", &lexicons(), None).is_empty());
    }

    #[test]
    fn no_letters_no_hypotheses() {
        assert!(hypotheses("", &lexicons(), Some(&Language::ENGLISH)).is_empty());
        assert!(hypotheses("2024 !?", &lexicons(), Some(&Language::ENGLISH)).is_empty());
    }

    #[test]
    fn probabilities_sum_to_one_and_are_sorted() {
        let found = hypotheses("Paris", &lexicons(), None);
        assert_eq!(found.len(), 2);
        assert!((found[0].1 - 0.5).abs() < 1e-9);
        // Equal weight: ordered by code.
        assert_eq!(found[0].0, Language::ENGLISH);
        assert_eq!(found[1].0, Language::FRENCH);

        let mixed = hypotheses("the fox Привет", &lexicons(), None);
        let sum: f64 = mixed.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(mixed.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
