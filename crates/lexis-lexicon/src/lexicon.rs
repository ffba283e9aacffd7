// Per-language word tables loaded from JSON
//
// A lexicon file looks like:
//
//   { "language": "en",
//     "entries": [ { "form": "fox", "class": "Noun", "rank": 812,
//                    "definition": "fox | fɒks | noun 1 a carnivorous ..." },
//                  { "form": "New York", "name": "PlaceName" } ] }
//
// Only `form` is required. Forms are stored with their natural
// capitalization ("London", "the", "NASA"); lookups that need to ignore
// case go through the folded index.

use std::collections::BTreeSet;
use std::path::Path;

use hashbrown::HashMap;
use lexis_core::{Language, NameType, PartOfSpeech};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::LexiconError;

// ---------------------------------------------------------------------------
// Embedded lexicons
// ---------------------------------------------------------------------------

const EMBEDDED_EN: &str = include_str!("../data/en.json");
const EMBEDDED_FR: &str = include_str!("../data/fr.json");
const EMBEDDED_DE: &str = include_str!("../data/de.json");

/// Languages that ship with an embedded lexicon.
pub const EMBEDDED_LANGUAGES: [Language; 3] = [Language::ENGLISH, Language::FRENCH, Language::GERMAN];

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One word (or multi-word name) in a lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Surface form, with its natural capitalization.
    pub form: String,

    /// Dictionary form. Defaults to the lowercased surface form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,

    /// Lexical class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<PartOfSpeech>,

    /// Name class, for personal, organization and place names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<NameType>,

    /// Frequency rank, 1 being the most frequent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    /// Raw dictionary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl Entry {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            lemma: None,
            class: None,
            name: None,
            rank: None,
            definition: None,
        }
    }

    /// The lemma, falling back to the lowercased form.
    pub fn lemma(&self) -> String {
        match &self.lemma {
            Some(lemma) => lemma.clone(),
            None => self.form.to_lowercase(),
        }
    }

    /// Number of whitespace-separated words in the form.
    pub fn word_count(&self) -> usize {
        self.form.split_whitespace().count()
    }

    /// Lexical class, with names counting as nouns when no class is given.
    pub fn lexical_class(&self) -> Option<PartOfSpeech> {
        self.class.or(self.name.map(|_| PartOfSpeech::Noun))
    }
}

/// On-disk shape of a lexicon file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconFile {
    pub language: Language,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// An indexed word table for one language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    language: Language,
    entries: Vec<Entry>,
    /// Exact form -> entry index.
    by_form: HashMap<String, usize>,
    /// Lowercased form -> entry indices, in insertion order.
    by_folded: HashMap<String, Vec<usize>>,
    /// Lowercased forms in sorted order, for prefix scans.
    folded_forms: BTreeSet<String>,
    max_name_words: usize,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            entries: Vec::new(),
            by_form: HashMap::new(),
            by_folded: HashMap::new(),
            folded_forms: BTreeSet::new(),
            max_name_words: 1,
        }
    }

    /// Parse a lexicon document.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Build a lexicon from an already-parsed document.
    pub fn from_file(file: LexiconFile) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon::new(file.language);
        for entry in file.entries {
            lexicon.insert(entry)?;
        }
        Ok(lexicon)
    }

    /// Read and parse a lexicon file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            language = %lexicon.language,
            entries = lexicon.len(),
            "loaded lexicon file"
        );
        Ok(lexicon)
    }

    /// The embedded lexicon for `language`, if one ships with the crate.
    pub fn embedded(language: &Language) -> Option<Result<Self, LexiconError>> {
        let json = match language.primary() {
            "en" => EMBEDDED_EN,
            "fr" => EMBEDDED_FR,
            "de" => EMBEDDED_DE,
            _ => return None,
        };
        Some(Self::from_json(json))
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest number of words in any multi-word form.
    pub fn max_name_words(&self) -> usize {
        self.max_name_words
    }

    /// Add an entry, replacing any existing entry with the same form.
    pub fn insert(&mut self, entry: Entry) -> Result<(), LexiconError> {
        let form = entry.form.trim();
        if form.is_empty() {
            return Err(LexiconError::EmptyForm);
        }
        let entry = Entry {
            form: form.to_string(),
            ..entry
        };
        self.max_name_words = self.max_name_words.max(entry.word_count());

        if let Some(&index) = self.by_form.get(&entry.form) {
            debug!(form = %entry.form, "replacing lexicon entry");
            self.entries[index] = entry;
            return Ok(());
        }

        let index = self.entries.len();
        let folded = entry.form.to_lowercase();
        self.by_form.insert(entry.form.clone(), index);
        self.by_folded.entry(folded.clone()).or_default().push(index);
        self.folded_forms.insert(folded);
        self.entries.push(entry);
        Ok(())
    }

    /// Merge `other` into this lexicon. Entries of `other` override entries
    /// with the same form.
    pub fn merge(&mut self, other: Lexicon) -> Result<(), LexiconError> {
        let count = other.len();
        for entry in other.entries {
            self.insert(entry)?;
        }
        info!(language = %self.language, merged = count, total = self.len(), "merged lexicon");
        Ok(())
    }

    /// Entry with exactly this form.
    pub fn get(&self, form: &str) -> Option<&Entry> {
        self.by_form.get(form).map(|&i| &self.entries[i])
    }

    /// Entry for a running-text token: the exact form, then the lowercased
    /// form (so sentence-initial "The" finds "the").
    pub fn lookup(&self, token: &str) -> Option<&Entry> {
        self.get(token).or_else(|| {
            let lower = token.to_lowercase();
            if lower == token { None } else { self.get(&lower) }
        })
    }

    /// Every entry whose form equals `word` ignoring case.
    pub fn folded(&self, word: &str) -> impl Iterator<Item = &Entry> {
        self.by_folded
            .get(&word.to_lowercase())
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }

    /// Whether `text` is a multi-word name in this lexicon.
    pub fn is_name(&self, text: &str) -> bool {
        self.get(text)
            .is_some_and(|e| e.name.is_some() && e.word_count() > 1)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries whose lowercased form starts with the lowercased `prefix`
    /// and is strictly longer than it, ranked by frequency rank (unranked
    /// last) then alphabetically.
    pub fn completions(&self, prefix: &str) -> Vec<&Entry> {
        let folded_prefix = prefix.to_lowercase();
        if folded_prefix.is_empty() {
            return Vec::new();
        }
        let mut found: Vec<&Entry> = self
            .folded_forms
            .range(folded_prefix.clone()..)
            .take_while(|f| f.starts_with(&folded_prefix))
            .filter(|f| f.len() > folded_prefix.len())
            .filter_map(|f| self.by_folded.get(f))
            .flatten()
            .map(|&i| &self.entries[i])
            .collect();
        found.sort_by(|a, b| {
            let ra = a.rank.unwrap_or(u32::MAX);
            let rb = b.rank.unwrap_or(u32::MAX);
            ra.cmp(&rb).then_with(|| a.form.cmp(&b.form))
        });
        found
    }
}
