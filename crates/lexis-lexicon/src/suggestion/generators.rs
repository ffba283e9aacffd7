// Suggestion generators
//
// Every generator rewrites the misspelled word in one way and hands each
// rewrite to the speller: case repair, a dropped, added, replaced or
// swapped character, or a bounded search over the vocabulary.

use lexis_core::case::{detect_case, match_case, CaseType};
use lexis_core::character::{simple_lower, simple_upper};
use lexis_core::SpellResult;

use super::status::SuggestionStatus;
use crate::speller::Speller;

/// One way of producing candidates for the word held by a [`SuggestionStatus`].
pub trait SuggestionGenerator: Send + Sync {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>);
}

/// Spell-check `candidate` and record it if the speller accepts it in any
/// casing, using the casing the speller asks for.
pub fn suggest_for_buffer(speller: &dyn Speller, status: &mut SuggestionStatus<'_>, candidate: &[char]) {
    if candidate.is_empty() || status.should_abort() {
        return;
    }
    let verdict = speller.spell(candidate);
    status.charge();
    let accepted = match verdict {
        SpellResult::Failed => return,
        SpellResult::Ok => candidate.iter().collect(),
        SpellResult::CapitalizeFirst => capitalize_first(candidate),
        SpellResult::CapitalizationError => speller
            .case_form(candidate)
            .unwrap_or_else(|| candidate.iter().collect()),
    };
    status.add_suggestion(accepted, base_priority(verdict));
}

fn capitalize_first(word: &[char]) -> String {
    let mut rest = word.iter().copied();
    rest.next().map(simple_upper).into_iter().chain(rest).collect()
}

/// Lower is better: exact hits beat candidates that needed a case fix.
fn base_priority(verdict: SpellResult) -> i32 {
    match verdict {
        SpellResult::Ok => 1,
        SpellResult::CapitalizeFirst => 2,
        SpellResult::CapitalizationError => 3,
        SpellResult::Failed => i32::MAX,
    }
}

/// The word itself, to catch pure case errors ("london", "nasa").
pub struct CaseChange;

impl SuggestionGenerator for CaseChange {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let original = status.word();
        suggest_for_buffer(speller, status, original);
    }
}

/// Drop one character.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let original = status.word();
        if original.len() < 2 {
            return;
        }
        let mut candidate = Vec::with_capacity(original.len() - 1);
        for (at, &c) in original.iter().enumerate() {
            // dropping the second of a doubled letter repeats the previous candidate
            if at > 0 && simple_lower(c) == simple_lower(original[at - 1]) {
                continue;
            }
            if status.should_abort() {
                break;
            }
            candidate.clear();
            candidate.extend_from_slice(&original[..at]);
            candidate.extend_from_slice(&original[at + 1..]);
            suggest_for_buffer(speller, status, &candidate);
        }
    }
}

/// Add one of `characters` at any position, trying the characters in order.
pub struct Insertion {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let original = status.word();
        if original.is_empty() {
            return;
        }
        let mut candidate = Vec::with_capacity(original.len() + 1);
        for &letter in &self.characters {
            for at in 0..=original.len() {
                if status.should_abort() {
                    return;
                }
                // same result as inserting after the identical letter
                if original.get(at).is_some_and(|&c| simple_lower(c) == letter) {
                    continue;
                }
                candidate.clear();
                candidate.extend_from_slice(&original[..at]);
                candidate.push(letter);
                candidate.extend_from_slice(&original[at..]);
                suggest_for_buffer(speller, status, &candidate);
            }
        }
    }
}

/// Replace single characters from a table of lowercase `[from, to, ...]`
/// pairs. An uppercase `from` is replaced by the uppercase `to`.
pub struct Replacement {
    pub replacements: Vec<char>,
}

impl SuggestionGenerator for Replacement {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let mut candidate = status.word().to_vec();
        for pair in self.replacements.chunks_exact(2) {
            let lower = (pair[0], pair[1]);
            let upper = (simple_upper(pair[0]), simple_upper(pair[1]));
            let passes = [lower, upper];
            let passes = if upper.0 == lower.0 { &passes[..1] } else { &passes[..] };
            for &(from, to) in passes {
                for at in 0..candidate.len() {
                    if candidate[at] != from {
                        continue;
                    }
                    candidate[at] = to;
                    suggest_for_buffer(speller, status, &candidate);
                    candidate[at] = from;
                    if status.should_abort() {
                        return;
                    }
                }
            }
        }
    }
}

/// Exchange two characters at most `reach` positions apart. The reach is 10
/// for words up to 8 characters and `50 / len` beyond that.
pub struct Swap;

impl SuggestionGenerator for Swap {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let original = status.word();
        let len = original.len();
        let reach = if len <= 8 { 10 } else { 50 / len };
        if len < 2 || reach == 0 {
            return;
        }
        let mut candidate = original.to_vec();
        for i in 0..len {
            for j in (i + 1)..len.min(i + reach + 1) {
                if status.should_abort() {
                    return;
                }
                if simple_lower(original[i]) == simple_lower(original[j]) {
                    continue;
                }
                candidate.swap(i, j);
                suggest_for_buffer(speller, status, &candidate);
                candidate.swap(i, j);
            }
        }
    }
}

/// Search the speller's vocabulary for forms within `max_distance` edits
/// (insertions, deletions, substitutions and adjacent transpositions),
/// ignoring case.
///
/// Catches misspellings that need more than one edit ("fundmntally"),
/// which the single-edit generators cannot reach. Each comparison costs one
/// unit of budget; forms whose length rules them out are skipped for free.
pub struct EditDistance {
    pub max_distance: usize,
}

impl SuggestionGenerator for EditDistance {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        if word.is_empty() || self.max_distance == 0 {
            return;
        }
        let folded: Vec<char> = word.iter().map(|&c| simple_lower(c)).collect();
        let model: String = word.iter().collect();

        let mut candidate = Vec::new();
        for form in speller.vocabulary() {
            if status.should_abort() {
                return;
            }
            candidate.clear();
            candidate.extend(form.chars().map(simple_lower));
            if candidate.len().abs_diff(folded.len()) > self.max_distance {
                continue;
            }
            status.charge();
            let Some(distance) = edit_distance_within(&folded, &candidate, self.max_distance) else {
                continue;
            };
            if distance == 0 {
                continue;
            }
            let suggestion = if detect_case(form) == CaseType::AllLower {
                match_case(&model, form)
            } else {
                form.to_string()
            };
            let priority = i32::try_from(distance).unwrap_or(i32::MAX - 1) + 1;
            status.add_suggestion(suggestion, priority);
        }
    }
}

/// Optimal string alignment distance between `a` and `b`, or `None` once it
/// is known to exceed `threshold`.
pub fn edit_distance_within(a: &[char], b: &[char], threshold: usize) -> Option<usize> {
    let (len1, len2) = (a.len(), b.len());
    if len1.abs_diff(len2) > threshold {
        return None;
    }
    if len1 == 0 || len2 == 0 {
        return Some(len1.max(len2));
    }

    let mut before_prev: Vec<usize> = vec![0; len2 + 1];
    let mut prev: Vec<usize> = (0..=len2).collect();
    let mut curr: Vec<usize> = vec![0; len2 + 1];
    let mut prev_min = 0;

    for i in 1..=len1 {
        curr[0] = i;
        let mut row_min = i;
        for j in 1..=len2 {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(before_prev[j - 2] + 1);
            }
            curr[j] = best;
            row_min = row_min.min(best);
        }
        // A transposition can reach back two rows, so both must be over.
        if row_min > threshold && prev_min > threshold {
            return None;
        }
        prev_min = row_min;
        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[len2];
    (distance <= threshold).then_some(distance)
}
