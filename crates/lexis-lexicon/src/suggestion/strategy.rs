// Suggestion strategy orchestration for typing errors

use super::generators::*;
use super::status::SuggestionStatus;
use crate::speller::Speller;

// =========================================================================
// Replacement tables (QWERTY keyboard adjacency)
// =========================================================================

/// Vowel confusions and the most common horizontal neighbour slips.
const REPLACEMENTS_1: &[char] = &[
    'a', 'e', 'e', 'a', 'e', 'i', 'i', 'e', 'i', 'o',
    'o', 'i', 'o', 'u', 'u', 'o', 'a', 'o', 'o', 'a',
    'i', 'y', 'y', 'i', 'a', 's', 's', 'a', 'e', 'r',
    'r', 'e', 'r', 't', 't', 'r', 'n', 'm', 'm', 'n',
    'c', 's', 's', 'c', 'c', 'k', 'k', 'c', 's', 'z',
    'z', 's',
];

/// Remaining horizontal and vertical keyboard neighbours.
const REPLACEMENTS_2: &[char] = &[
    'q', 'w', 'w', 'q', 'w', 'e', 'e', 'w', 't', 'y',
    'y', 't', 'y', 'u', 'u', 'y', 'u', 'i', 'i', 'u',
    'o', 'p', 'p', 'o', 's', 'd', 'd', 's', 'd', 'f',
    'f', 'd', 'f', 'g', 'g', 'f', 'g', 'h', 'h', 'g',
    'h', 'j', 'j', 'h', 'j', 'k', 'k', 'j', 'k', 'l',
    'l', 'k', 'z', 'x', 'x', 'z', 'x', 'c', 'c', 'x',
    'c', 'v', 'v', 'c', 'v', 'b', 'b', 'v', 'b', 'n',
    'n', 'b', 'e', 'd', 'd', 'e', 'r', 'f', 'f', 'r',
    't', 'g', 'g', 't', 'y', 'h', 'h', 'y', 'u', 'j',
    'j', 'u', 'i', 'k', 'k', 'i', 'o', 'l', 'l', 'o',
    'a', 'q', 'q', 'a', 'd', 'c', 'f', 'v', 'g', 'b',
    'h', 'n', 'j', 'm',
];

/// Insertion characters, by English letter frequency.
const INSERTION_CHARS: &str = "etaoinshrdlcumwfgypbvkjxqz'-";

/// Budget used when no other is configured.
pub const DEFAULT_MAX_COST: usize = 800;

// =========================================================================
// SuggestionStrategy
// =========================================================================

/// Primary and secondary generator lists run under a cost budget.
pub struct SuggestionStrategy {
    max_cost: usize,
    /// Run first; if any of them finds something, the rest are skipped.
    primary_generators: Vec<Box<dyn SuggestionGenerator>>,
    /// Run only when the primaries found nothing.
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        status.set_max_cost(self.max_cost);

        for generator in &self.primary_generators {
            if status.should_abort() {
                break;
            }
            generator.generate(speller, status);
        }
        if status.suggestion_count() > 0 {
            return;
        }

        for generator in &self.generators {
            if status.should_abort() {
                break;
            }
            generator.generate(speller, status);
        }
    }
}

// =========================================================================
// Factory functions
// =========================================================================

/// Strategy for keyboard typing errors.
///
/// Single-edit generators run before the vocabulary search so that cheap
/// hits are found first; `max_edit_distance` bounds the vocabulary search
/// and 0 disables it.
pub fn typing_strategy(max_cost: usize, max_edit_distance: usize) -> SuggestionStrategy {
    let primary_generators: Vec<Box<dyn SuggestionGenerator>> = vec![Box::new(CaseChange)];

    let mut generators: Vec<Box<dyn SuggestionGenerator>> = vec![
        Box::new(Replacement {
            replacements: REPLACEMENTS_1.to_vec(),
        }),
        Box::new(Deletion),
        Box::new(Swap),
    ];
    if max_edit_distance > 0 {
        generators.push(Box::new(EditDistance {
            max_distance: max_edit_distance,
        }));
    }
    generators.push(Box::new(Insertion {
        characters: INSERTION_CHARS.chars().collect(),
    }));
    generators.push(Box::new(Replacement {
        replacements: REPLACEMENTS_2.to_vec(),
    }));

    SuggestionStrategy {
        max_cost,
        primary_generators,
        generators,
    }
}

pub fn default_typing_strategy() -> SuggestionStrategy {
    typing_strategy(DEFAULT_MAX_COST, 2)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_core::SpellResult;

    struct MockSpeller {
        accepted: Vec<&'static str>,
    }

    impl MockSpeller {
        fn new(words: &[&'static str]) -> Self {
            Self {
                accepted: words.to_vec(),
            }
        }
    }

    impl Speller for MockSpeller {
        fn spell(&self, word: &[char]) -> SpellResult {
            let s: String = word.iter().collect();
            let mut capitalized: Vec<char> = word.to_vec();
            if let Some(first) = capitalized.first_mut() {
                *first = first.to_ascii_uppercase();
            }
            let capitalized: String = capitalized.into_iter().collect();
            if self.accepted.contains(&s.as_str()) {
                SpellResult::Ok
            } else if self.accepted.contains(&capitalized.as_str()) {
                SpellResult::CapitalizeFirst
            } else {
                SpellResult::Failed
            }
        }

        fn vocabulary(&self) -> Box<dyn Iterator<Item = &str> + '_> {
            Box::new(self.accepted.iter().copied())
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn suggest(strategy: &SuggestionStrategy, speller: &MockSpeller, word: &str) -> Vec<String> {
        let word = chars(word);
        let mut status = SuggestionStatus::new(&word, 5);
        strategy.generate(speller, &mut status);
        status.sort_suggestions();
        status.into_suggestions().into_iter().map(|s| s.word).collect()
    }

    #[test]
    fn replacement_tables_are_pairs() {
        assert_eq!(REPLACEMENTS_1.len() % 2, 0);
        assert_eq!(REPLACEMENTS_2.len() % 2, 0);
    }

    #[test]
    fn primary_short_circuits() {
        // The secondaries would also find "loudon" one edit away.
        let speller = MockSpeller::new(&["London", "loudon"]);
        assert_eq!(suggest(&default_typing_strategy(), &speller, "london"), vec!["London"]);
    }

    #[test]
    fn deletion() {
        let speller = MockSpeller::new(&["quick"]);
        assert_eq!(suggest(&default_typing_strategy(), &speller, "quicck"), vec!["quick"]);
    }

    #[test]
    fn swap() {
        let speller = MockSpeller::new(&["brown"]);
        assert_eq!(suggest(&default_typing_strategy(), &speller, "borwn"), vec!["brown"]);
    }

    #[test]
    fn replacement() {
        let speller = MockSpeller::new(&["lazy"]);
        assert_eq!(suggest(&default_typing_strategy(), &speller, "lazu"), vec!["lazy"]);
    }

    #[test]
    fn two_edits_need_the_vocabulary_search() {
        let speller = MockSpeller::new(&["fundamentally"]);
        assert_eq!(
            suggest(&default_typing_strategy(), &speller, "fundmntally"),
            vec!["fundamentally"]
        );
        assert!(suggest(&typing_strategy(DEFAULT_MAX_COST, 0), &speller, "fundmntally").is_empty());
    }

    #[test]
    fn single_edits_rank_before_vocabulary_hits() {
        let speller = MockSpeller::new(&["jumps", "dumps"]);
        let found = suggest(&default_typing_strategy(), &speller, "jumpz");
        assert_eq!(found[0], "jumps");
    }

    #[test]
    fn respects_max_suggestions() {
        let speller = MockSpeller::new(&["a", "b", "c", "d", "e"]);
        let word = chars("x");
        let mut status = SuggestionStatus::new(&word, 2);
        default_typing_strategy().generate(&speller, &mut status);
        assert!(status.suggestion_count() <= 2);
    }

    #[test]
    fn small_budget_terminates() {
        let speller = MockSpeller::new(&["fox"]);
        let word = chars("xyzzyxyzzy");
        let mut status = SuggestionStatus::new(&word, 5);
        typing_strategy(1, 2).generate(&speller, &mut status);
        assert_eq!(status.suggestion_count(), 0);
    }

    #[test]
    fn generator_counts() {
        let strategy = default_typing_strategy();
        assert_eq!(strategy.primary_generators.len(), 1);
        assert_eq!(strategy.generators.len(), 6);
        assert_eq!(typing_strategy(DEFAULT_MAX_COST, 0).generators.len(), 5);
    }
}
