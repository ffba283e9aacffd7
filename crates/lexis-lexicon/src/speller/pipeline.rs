// Top-level spell check pipeline: option bypasses and case handling

use lexis_core::case::{detect_case, CaseType};
use lexis_core::character::{is_upper, simple_lower};
use lexis_core::SpellResult;
use serde::{Deserialize, Serialize};

use super::Speller;

/// Words longer than this are always rejected.
pub const MAX_WORD_CHARS: usize = 255;

/// Spell check options controlling how words are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellOptions {
    /// Accept words containing digits without checking.
    pub ignore_numbers: bool,
    /// Accept words written entirely in uppercase without checking.
    pub ignore_uppercase: bool,
    /// Accept non-words (URLs, email addresses).
    pub ignore_nonwords: bool,
    /// Accept a capitalized first letter on a lowercase word ("The").
    pub accept_first_uppercase: bool,
    /// Accept all-uppercase spellings of known words ("LONDON").
    pub accept_all_uppercase: bool,
}

impl Default for SpellOptions {
    fn default() -> Self {
        Self {
            ignore_numbers: true,
            ignore_uppercase: false,
            ignore_nonwords: true,
            accept_first_uppercase: true,
            accept_all_uppercase: true,
        }
    }
}

/// Whether a word looks like a URL, an e-mail address or a `www.` host.
fn is_nonword(word: &[char]) -> bool {
    let nchars = word.len();
    if nchars < 4 {
        return false;
    }

    // "//" followed by a "." -> URL
    if let Some(slash) = word[..nchars - 3].iter().position(|&c| c == '/') {
        if word[slash + 1] == '/' && word[slash + 2..].contains(&'.') {
            return true;
        }
    }

    // "@" with a "." after it -> e-mail
    if let Some(at) = word.iter().position(|&c| c == '@') {
        if at > 0 && word[at + 1..].contains(&'.') {
            return true;
        }
    }

    nchars >= 5
        && word[..3].iter().all(|&c| simple_lower(c) == 'w')
        && word[3] == '.'
        && word[4..].contains(&'.')
}

/// Normalize typographic variants before lookup: Unicode hyphens to
/// hyphen-minus, typographic apostrophes to `'`, and the common Latin
/// ligatures to their letters.
fn normalize(word: &[char]) -> Vec<char> {
    let mut result = Vec::with_capacity(word.len() + 2);
    for &c in word {
        match c {
            '\u{2010}' | '\u{2011}' => result.push('-'),
            '\u{2019}' | '\u{02BC}' => result.push('\''),
            '\u{FB00}' => result.extend(['f', 'f']),
            '\u{FB01}' => result.extend(['f', 'i']),
            '\u{FB02}' => result.extend(['f', 'l']),
            '\u{FB03}' => result.extend(['f', 'f', 'i']),
            '\u{FB04}' => result.extend(['f', 'f', 'l']),
            c => result.push(c),
        }
    }
    result
}

/// Check a single word.
///
/// Returns `true` when the word is correct or bypassed by `options`.
pub fn spell_check(word: &[char], speller: &dyn Speller, options: &SpellOptions) -> bool {
    if word.is_empty() {
        return true;
    }
    if word.len() > MAX_WORD_CHARS {
        return false;
    }

    let nword = normalize(word);

    if options.ignore_numbers && nword.iter().any(|c| c.is_numeric()) {
        return true;
    }

    let word_string: String = nword.iter().collect();
    let mut caps = detect_case(&word_string);

    if options.ignore_uppercase && caps == CaseType::AllUpper {
        return true;
    }
    if options.ignore_nonwords && is_nonword(&nword) {
        return true;
    }
    if caps == CaseType::AllUpper && !options.accept_all_uppercase {
        caps = CaseType::Complex;
    }

    // Complex and caseless words: exact capitalization, except that the
    // first letter may be uppercase where the form has it lowercase.
    if caps == CaseType::Complex || caps == CaseType::NoLetters {
        let mut buffer = nword.clone();
        buffer[0] = simple_lower(buffer[0]);
        let sres = speller.spell(&buffer);
        return sres == SpellResult::Ok
            || (sres == SpellResult::CapitalizeFirst
                && options.accept_first_uppercase
                && is_upper(nword[0]));
    }

    let buffer: Vec<char> = nword.iter().map(|&c| simple_lower(c)).collect();
    let sres = speller.spell(&buffer);
    accepts(sres, caps, options)
}

/// Map a speller result for the lowercased word back through the case
/// pattern of the original word.
fn accepts(sres: SpellResult, caps: CaseType, options: &SpellOptions) -> bool {
    match caps {
        CaseType::AllLower => sres == SpellResult::Ok,
        CaseType::FirstUpper => {
            (sres == SpellResult::Ok && options.accept_first_uppercase)
                || sres == SpellResult::CapitalizeFirst
        }
        CaseType::AllUpper => sres != SpellResult::Failed,
        CaseType::Complex | CaseType::NoLetters => false,
    }
}
