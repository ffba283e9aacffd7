// Speller backed by a lexicon's form tables

use lexis_core::SpellResult;
use lexis_core::character::simple_upper;

use super::Speller;
use crate::lexicon::Lexicon;

/// Checks words against the forms of one lexicon.
///
/// - `Ok`: the word is a form exactly as written.
/// - `CapitalizeFirst`: the word becomes a form when its first letter is
///   uppercased ("london" for "London", "mcDonald" for "McDonald").
/// - `CapitalizationError`: a form matches ignoring case ("nasa" for "NASA").
/// - `Failed`: nothing matches.
pub struct LexiconSpeller<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> LexiconSpeller<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }
}

impl Speller for LexiconSpeller<'_> {
    fn spell(&self, word: &[char]) -> SpellResult {
        let Some(&first) = word.first() else {
            return SpellResult::Failed;
        };
        let text: String = word.iter().collect();
        if self.lexicon.get(&text).is_some() {
            return SpellResult::Ok;
        }

        let mut capitalized = String::with_capacity(text.len());
        capitalized.push(simple_upper(first));
        capitalized.extend(&word[1..]);
        if capitalized != text && self.lexicon.get(&capitalized).is_some() {
            return SpellResult::CapitalizeFirst;
        }

        if self.lexicon.folded(&text).next().is_some() {
            SpellResult::CapitalizationError
        } else {
            SpellResult::Failed
        }
    }

    fn case_form(&self, word: &[char]) -> Option<String> {
        let text: String = word.iter().collect();
        self.lexicon.folded(&text).next().map(|e| e.form.clone())
    }

    fn vocabulary(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.lexicon.entries().iter().map(|e| e.form.as_str()))
    }
}
