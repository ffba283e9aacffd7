// Spell checking module

pub mod lexicon;
pub mod pipeline;

use lexis_core::SpellResult;

/// Trait for spell checkers.
///
/// Words are passed as `char` slices for random-access editing by the
/// suggestion generators. The pipeline lowercases simple-case words before
/// calling `spell`, so an implementation reports capitalization problems
/// through `CapitalizeFirst` and `CapitalizationError` rather than failing.
pub trait Speller {
    /// Check whether `word` is correct (or would be correct with different
    /// capitalization).
    fn spell(&self, word: &[char]) -> SpellResult;

    /// The stored spelling of a word that differs from a known form only in
    /// case ("NASA" for "nasa"). `None` when unknown or not supported.
    fn case_form(&self, _word: &[char]) -> Option<String> {
        None
    }

    /// Known correct forms, for generators that search the vocabulary
    /// directly instead of editing the input. Empty by default.
    fn vocabulary(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(std::iter::empty())
    }
}
