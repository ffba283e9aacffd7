// Provider configuration: JSON file, defaults and environment overrides

use std::env;
use std::path::{Path, PathBuf};

use lexis_core::Language;
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::speller::pipeline::SpellOptions;
use crate::suggestion::strategy::DEFAULT_MAX_COST;

/// Overrides `max_suggestions`.
pub const ENV_MAX_SUGGESTIONS: &str = "LEXIS_MAX_SUGGESTIONS";
/// Overrides `max_completions`.
pub const ENV_MAX_COMPLETIONS: &str = "LEXIS_MAX_COMPLETIONS";
/// Replaces `additional_paths`, using the platform's path list separator.
pub const ENV_LEXICON_PATH: &str = "LEXIS_LEXICON_PATH";

fn default_max_suggestions() -> usize {
    5
}

fn default_max_completions() -> usize {
    10
}

fn default_suggestion_budget() -> usize {
    DEFAULT_MAX_COST
}

fn default_max_edit_distance() -> usize {
    2
}

fn default_fallback_language() -> Option<Language> {
    Some(Language::ENGLISH)
}

/// Settings for [`LexiconServices`](crate::LexiconServices).
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "spelling": { "ignore_uppercase": true },
///   "max_suggestions": 3,
///   "additional_paths": ["/usr/share/lexis/es.json"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub spelling: SpellOptions,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default = "default_max_completions")]
    pub max_completions: usize,
    /// Speller calls allowed per suggestion request.
    #[serde(default = "default_suggestion_budget")]
    pub suggestion_budget: usize,
    /// Largest edit distance the vocabulary search accepts; 0 disables it.
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
    /// Language assumed for Latin-script text no lexicon recognizes.
    #[serde(default = "default_fallback_language")]
    pub fallback_language: Option<Language>,
    /// Lexicon files loaded after the embedded ones.
    pub additional_paths: Vec<PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            spelling: SpellOptions::default(),
            max_suggestions: default_max_suggestions(),
            max_completions: default_max_completions(),
            suggestion_budget: default_suggestion_budget(),
            max_edit_distance: default_max_edit_distance(),
            fallback_language: default_fallback_language(),
            additional_paths: vec![],
        }
    }
}

impl LexiconConfig {
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Defaults with the process environment applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_with(|key| env::var(key).ok());
        config
    }

    /// Apply environment overrides read through `lookup`. Unparsable values
    /// are ignored.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(n) = lookup(ENV_MAX_SUGGESTIONS).and_then(|v| v.trim().parse().ok()) {
            self.max_suggestions = n;
        }
        if let Some(n) = lookup(ENV_MAX_COMPLETIONS).and_then(|v| v.trim().parse().ok()) {
            self.max_completions = n;
        }
        if let Some(paths) = lookup(ENV_LEXICON_PATH) {
            self.additional_paths = env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }
    }
}
