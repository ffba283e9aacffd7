// Case pattern detection and conversion

use crate::character::{is_lower, is_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No cased letters at all ("123", "中文").
    NoLetters,
    /// All letters are lowercase: "fox".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Fox".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "McDonald".
    Complex,
    /// All letters are uppercase: "FOX".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Characters without case (digits, punctuation, uncased scripts) are
/// ignored.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let first_uc = is_upper(first);
    let mut no_letters = !first_uc && !is_lower(first);
    let mut all_uc = !is_lower(first);
    let mut rest_lc = true;

    for c in chars {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            no_letters = false;
            all_uc = false;
        }
    }

    if no_letters {
        CaseType::NoLetters
    } else if all_uc {
        CaseType::AllUpper
    } else if !rest_lc {
        CaseType::Complex
    } else if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Re-case `word` to the given pattern.
///
/// `NoLetters` and `Complex` leave the word unchanged. Full Unicode case
/// mapping is used, so the result may differ in length from the input.
pub fn set_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.to_lowercase(),
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
                None => String::new(),
            }
        }
    }
}

/// Apply the case pattern of `model` to `word`.
///
/// Only first-upper and all-upper transfer between words of different
/// lengths; otherwise `word` is returned as is. A one-letter capital counts
/// as first-upper.
pub fn match_case(model: &str, word: &str) -> String {
    match detect_case(model) {
        CaseType::AllUpper if model.chars().count() > 1 => set_case(word, CaseType::AllUpper),
        CaseType::FirstUpper | CaseType::AllUpper => set_case(word, CaseType::FirstUpper),
        _ => word.to_string(),
    }
}
