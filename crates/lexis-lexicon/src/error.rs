use std::path::PathBuf;

use lexis_core::Language;

/// Errors raised while loading or querying lexicons.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A lexicon or configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lexicon or configuration document is not valid JSON for its schema.
    #[error("malformed lexicon data: {0}")]
    Json(#[from] serde_json::Error),

    /// A lexicon entry has an empty (or whitespace-only) form.
    #[error("lexicon entry has an empty form")]
    EmptyForm,

    /// No lexicon is loaded for the requested language.
    #[error("no lexicon loaded for language {0}")]
    MissingLexicon(Language),
}
