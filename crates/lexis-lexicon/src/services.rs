// LexiconServices: top-level integration point of the reference provider.
//
// Owns the loaded lexicons, the configuration and the typing suggestion
// strategy, and implements `LinguisticServices` on top of them. Spellers are
// lightweight views over a lexicon and are created per call, so the
// provider stays immutable while it is shared.

use std::ops::Range;
use std::path::Path;

use lexis_core::case::{detect_case, match_case, CaseType};
use lexis_core::{
    Language, LinguisticServices, PartOfSpeech, Tag, TagScheme, TaggedSpan, Token, TokenType,
    TokenizeOptions,
};
use tracing::{info, warn};

use crate::config::LexiconConfig;
use crate::error::LexiconError;
use crate::identify;
use crate::lexicon::{EMBEDDED_LANGUAGES, Entry, Lexicon};
use crate::speller::lexicon::LexiconSpeller;
use crate::speller::pipeline::spell_check;
use crate::suggestion::status::SuggestionStatus;
use crate::suggestion::strategy::{typing_strategy, SuggestionStrategy};
use crate::tokenizer::{self, NameLookup};

/// Lexicon-backed `LinguisticServices` provider.
///
/// Build one with [`LexiconServices::new`] (embedded lexicons and default
/// configuration), then share it as `Arc<dyn LinguisticServices>`.
pub struct LexiconServices {
    lexicons: Vec<Lexicon>,
    config: LexiconConfig,
    strategy: SuggestionStrategy,
}

impl LexiconServices {
    /// Embedded lexicons with the default configuration.
    pub fn new() -> Result<Self, LexiconError> {
        Self::with_config(LexiconConfig::default())
    }

    /// Embedded lexicons with the configuration taken from `LEXIS_*`
    /// environment variables.
    pub fn from_env() -> Result<Self, LexiconError> {
        Self::with_config(LexiconConfig::from_env())
    }

    /// Embedded lexicons plus every file in `config.additional_paths`.
    ///
    /// Embedded data that fails to parse is an error. Additional files that
    /// cannot be loaded are logged and skipped.
    pub fn with_config(config: LexiconConfig) -> Result<Self, LexiconError> {
        let mut services = Self::empty(config);
        for language in &EMBEDDED_LANGUAGES {
            if let Some(lexicon) = Lexicon::embedded(language) {
                services.add_lexicon(lexicon?)?;
            }
        }
        let paths = services.config.additional_paths.clone();
        for path in &paths {
            if let Err(err) = services.load_lexicon_file(path) {
                warn!(path = %path.display(), error = %err, "skipping lexicon file");
            }
        }
        info!(languages = services.lexicons.len(), "lexicon services ready");
        Ok(services)
    }

    /// A provider with no lexicons at all.
    pub fn empty(config: LexiconConfig) -> Self {
        let strategy = typing_strategy(config.suggestion_budget, config.max_edit_distance);
        Self {
            lexicons: Vec::new(),
            config,
            strategy,
        }
    }

    /// Add a lexicon, merging it into an already loaded lexicon of the same
    /// language.
    pub fn add_lexicon(&mut self, lexicon: Lexicon) -> Result<(), LexiconError> {
        match self.lexicons.iter_mut().find(|l| l.language() == lexicon.language()) {
            Some(existing) => existing.merge(lexicon),
            None => {
                self.lexicons.push(lexicon);
                Ok(())
            }
        }
    }

    pub fn load_lexicon_file(&mut self, path: impl AsRef<Path>) -> Result<(), LexiconError> {
        let lexicon = Lexicon::from_path(path)?;
        self.add_lexicon(lexicon)
    }

    /// The lexicon for `language`, matching the full code first and then
    /// the primary subtag ("en-GB" uses "en").
    pub fn lexicon(&self, language: &Language) -> Result<&Lexicon, LexiconError> {
        self.lexicons
            .iter()
            .find(|l| l.language() == language)
            .or_else(|| {
                self.lexicons
                    .iter()
                    .find(|l| l.language().primary() == language.primary())
            })
            .ok_or_else(|| LexiconError::MissingLexicon(language.clone()))
    }

    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.lexicons.iter().map(Lexicon::language)
    }

    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Whether `word` is spelled correctly in `language`. Languages without
    /// a lexicon accept everything.
    pub fn spell(&self, word: &str, language: &Language) -> bool {
        let Ok(lexicon) = self.lexicon(language) else {
            return true;
        };
        let chars: Vec<char> = word.chars().collect();
        spell_check(&chars, &LexiconSpeller::new(lexicon), &self.config.spelling)
    }

    /// Spelling suggestions for `word`, best first, at most
    /// `max_suggestions` of them.
    pub fn suggest(&self, word: &str, language: &Language) -> Vec<String> {
        let Ok(lexicon) = self.lexicon(language) else {
            return Vec::new();
        };
        let chars: Vec<char> = word.chars().collect();
        let speller = LexiconSpeller::new(lexicon);

        // Collect 3x candidates, sort, then truncate.
        let mut status = SuggestionStatus::new(&chars, self.config.max_suggestions.saturating_mul(3));
        self.strategy.generate(&speller, &mut status);
        status.sort_suggestions();

        let mut found: Vec<String> = Vec::new();
        for suggestion in status.into_suggestions() {
            let suggestion = restore_case(word, suggestion.word);
            if suggestion != word && !found.contains(&suggestion) {
                found.push(suggestion);
            }
            if found.len() >= self.config.max_suggestions {
                break;
            }
        }
        found
    }

    /// Whether `text` is a multi-word name in any lexicon.
    fn is_name(&self, text: &str) -> bool {
        self.lexicons.iter().any(|l| l.is_name(text))
    }

    /// Longest name, in words, across the loaded lexicons.
    fn max_name_words(&self) -> usize {
        self.lexicons.iter().map(Lexicon::max_name_words).max().unwrap_or(1)
    }

    fn entry_for(&self, token: &str, language: &Language) -> Option<&Entry> {
        self.lexicon(language).ok()?.lookup(token)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn set_ignore_numbers(&mut self, value: bool) {
        self.config.spelling.ignore_numbers = value;
    }

    pub fn set_ignore_uppercase(&mut self, value: bool) {
        self.config.spelling.ignore_uppercase = value;
    }

    pub fn set_ignore_nonwords(&mut self, value: bool) {
        self.config.spelling.ignore_nonwords = value;
    }

    pub fn set_accept_first_uppercase(&mut self, value: bool) {
        self.config.spelling.accept_first_uppercase = value;
    }

    pub fn set_accept_all_uppercase(&mut self, value: bool) {
        self.config.spelling.accept_all_uppercase = value;
    }

    pub fn set_max_suggestions(&mut self, value: usize) {
        self.config.max_suggestions = value;
    }

    pub fn set_max_completions(&mut self, value: usize) {
        self.config.max_completions = value;
    }

    pub fn set_suggestion_budget(&mut self, value: usize) {
        self.config.suggestion_budget = value;
        self.rebuild_strategy();
    }

    pub fn set_max_edit_distance(&mut self, value: usize) {
        self.config.max_edit_distance = value;
        self.rebuild_strategy();
    }

    pub fn set_fallback_language(&mut self, value: Option<Language>) {
        self.config.fallback_language = value;
    }

    fn rebuild_strategy(&mut self) {
        self.strategy = typing_strategy(self.config.suggestion_budget, self.config.max_edit_distance);
    }
}

/// Give an all-lowercase lexicon form the case pattern of the typed word
/// ("Quikc" suggests "Quick", not "quick").
fn restore_case(typed: &str, form: String) -> String {
    if detect_case(&form) == CaseType::AllLower {
        match_case(typed, &form)
    } else {
        form
    }
}

/// Tag of `entry` (or of an unknown token) in `scheme`.
fn tag_for(entry: Option<&Entry>, token: &str, scheme: TagScheme) -> Option<Tag> {
    let numeric = token.chars().next().is_some_and(|c| c.is_numeric());
    match scheme {
        TagScheme::LexicalClass => match entry {
            Some(entry) => entry.lexical_class().map(PartOfSpeech::tag),
            None if numeric => Some(Tag::NUMBER),
            None => None,
        },
        TagScheme::NameType => {
            let entry = entry?;
            Some(entry.name.map_or(Tag::OTHER_WORD, |name| name.tag()))
        }
        TagScheme::NameTypeOrLexicalClass => match entry {
            Some(entry) => entry
                .name
                .map(|name| name.tag())
                .or_else(|| entry.lexical_class().map(PartOfSpeech::tag)),
            None if numeric => Some(Tag::NUMBER),
            None => None,
        },
        TagScheme::Lemma => entry.map(|e| Tag::new(e.lemma())),
    }
}

impl LinguisticServices for LexiconServices {
    fn tokenize(&self, text: &str, options: TokenizeOptions) -> Vec<Token> {
        let is_name = |candidate: &str| self.is_name(candidate);
        let names = NameLookup {
            is_name: &is_name,
            max_words: self.max_name_words(),
        };
        tokenizer::tokenize(text, options, Some(names))
    }

    fn identify_language(&self, text: &str) -> Option<Language> {
        self.language_hypotheses(text, 1)
            .into_iter()
            .next()
            .map(|(language, _)| language)
    }

    fn language_hypotheses(&self, text: &str, max: usize) -> Vec<(Language, f64)> {
        let mut found = identify::hypotheses(text, &self.lexicons, self.config.fallback_language.as_ref());
        found.truncate(max);
        found
    }

    fn tags(&self, text: &str, language: &Language, scheme: TagScheme, span: Range<usize>) -> Vec<TaggedSpan> {
        let Some(slice) = text.get(span.clone()) else {
            return Vec::new();
        };
        self.tokenize(slice, TokenizeOptions::default())
            .into_iter()
            .filter(|t| t.token_type == TokenType::Word)
            .filter_map(|t| {
                let token = t.text(slice)?;
                let tag = tag_for(self.entry_for(token, language), token, scheme);
                Some(TaggedSpan::new(tag, span.start + t.span.start..span.start + t.span.end))
            })
            .collect()
    }

    fn check_spelling(&self, word: &str, language: &Language, start: usize) -> Option<Range<usize>> {
        let lexicon = self.lexicon(language).ok()?;
        let rest = word.get(start..)?;
        let speller = LexiconSpeller::new(lexicon);
        self.tokenize(rest, TokenizeOptions::default())
            .into_iter()
            .filter(|t| t.token_type == TokenType::Word)
            .find(|t| {
                t.text(rest).is_some_and(|token| {
                    let chars: Vec<char> = token.chars().collect();
                    !spell_check(&chars, &speller, &self.config.spelling)
                })
            })
            .map(|t| start + t.span.start..start + t.span.end)
    }

    fn correction(&self, word: &str, language: &Language) -> Option<String> {
        if self.spell(word, language) {
            return None;
        }
        self.suggest(word, language).into_iter().next()
    }

    fn guesses(&self, word: &str, language: &Language) -> Vec<String> {
        if self.spell(word, language) {
            return Vec::new();
        }
        self.suggest(word, language)
    }

    fn completions(&self, prefix: &str, language: &Language) -> Vec<String> {
        let Ok(lexicon) = self.lexicon(language) else {
            return Vec::new();
        };
        let mut found: Vec<String> = Vec::new();
        for entry in lexicon.completions(prefix) {
            if found.len() >= self.config.max_completions {
                break;
            }
            let completion = restore_case(prefix, entry.form.clone());
            if !found.contains(&completion) {
                found.push(completion);
            }
        }
        found
    }

    fn definition(&self, word: &str) -> Option<String> {
        let direct = self
            .lexicons
            .iter()
            .find_map(|l| l.lookup(word).and_then(|e| e.definition.clone()));
        direct.or_else(|| {
            self.lexicons.iter().find_map(|l| {
                let lemma = l.lookup(word)?.lemma();
                l.lookup(&lemma)?.definition.clone()
            })
        })
    }
}
