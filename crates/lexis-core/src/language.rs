// Language identifiers and identification guesses

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A provider language identifier, e.g. `"en"`, `"fr"`, `"zh-Hans"`.
///
/// Equality is by code. The well-known constants are borrowed statics, so
/// cloning them never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(Cow<'static, str>);

impl Language {
    pub const ARABIC: Language = Language::from_static("ar");
    pub const CHINESE: Language = Language::from_static("zh");
    pub const ENGLISH: Language = Language::from_static("en");
    pub const FRENCH: Language = Language::from_static("fr");
    pub const GERMAN: Language = Language::from_static("de");
    pub const GREEK: Language = Language::from_static("el");
    pub const HEBREW: Language = Language::from_static("he");
    pub const HINDI: Language = Language::from_static("hi");
    pub const ITALIAN: Language = Language::from_static("it");
    pub const JAPANESE: Language = Language::from_static("ja");
    pub const KOREAN: Language = Language::from_static("ko");
    pub const PORTUGUESE: Language = Language::from_static("pt");
    pub const RUSSIAN: Language = Language::from_static("ru");
    pub const SPANISH: Language = Language::from_static("es");
    pub const THAI: Language = Language::from_static("th");

    /// Identifier for the undetermined language, `"und"`.
    pub const UNDETERMINED: Language = Language::from_static("und");

    /// Wrap a static code without validation.
    pub const fn from_static(code: &'static str) -> Self {
        Language(Cow::Borrowed(code))
    }

    /// Create a language from a code.
    ///
    /// The code is kept as given; use [`str::parse`] to validate it.
    pub fn new(code: impl Into<String>) -> Self {
        Language(Cow::Owned(code.into()))
    }

    /// The language code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// The primary language subtag ("zh" for "zh-Hans").
    pub fn primary(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(&self.0)
    }

    pub fn is_undetermined(&self) -> bool {
        self.0 == "und"
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error returned when parsing a malformed language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid language code: {code:?}")]
pub struct ParseLanguageError {
    pub code: String,
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    /// Accepts a 2-3 letter primary subtag optionally followed by
    /// alphanumeric subtags separated by `-` or `_`. The primary subtag is
    /// lowercased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLanguageError { code: s.to_string() };
        let mut parts = s.split(['-', '_']);
        let primary = parts.next().ok_or_else(err)?;
        if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(err());
        }
        let mut code = primary.to_ascii_lowercase();
        for part in parts {
            if part.is_empty() || part.len() > 8 || !part.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(err());
            }
            code.push('-');
            code.push_str(part);
        }
        Ok(Language::new(code))
    }
}

// ---------------------------------------------------------------------------
// LanguageGuess
// ---------------------------------------------------------------------------

/// A language hypothesis with its confidence as a percentage in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageGuess {
    pub language: Language,
    pub confidence: f64,
}

impl LanguageGuess {
    /// Build a guess from a provider probability in `[0, 1]`.
    ///
    /// Out-of-range probabilities are clamped.
    pub fn from_probability(language: Language, probability: f64) -> Self {
        let confidence = (probability * 100.0).clamp(0.0, 100.0);
        Self { language, confidence }
    }
}
