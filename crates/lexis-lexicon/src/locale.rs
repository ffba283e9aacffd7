// Locale display-name catalog backed by embedded tables

use std::collections::BTreeMap;

use lexis_core::{LocaleComponent, LocaleComponents, LocaleNames};
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

const EMBEDDED_LOCALES: &str = include_str!("../data/locales.json");

/// Names of every component kind, as written in one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentNames {
    pub language: BTreeMap<String, String>,
    pub script: BTreeMap<String, String>,
    pub region: BTreeMap<String, String>,
    pub variant: BTreeMap<String, String>,
}

impl ComponentNames {
    fn table(&self, component: LocaleComponent) -> &BTreeMap<String, String> {
        match component {
            LocaleComponent::Language => &self.language,
            LocaleComponent::Script => &self.script,
            LocaleComponent::Region => &self.region,
            LocaleComponent::Variant => &self.variant,
        }
    }
}

/// Known locale identifiers and display-name tables keyed by the language
/// the names are written in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleCatalog {
    identifiers: Vec<String>,
    names: BTreeMap<String, ComponentNames>,
}

impl LocaleCatalog {
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The catalog compiled into the crate (names in English, French and
    /// German).
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::from_json(EMBEDDED_LOCALES)
    }

    /// Languages the catalog has names written in.
    pub fn display_languages(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// The tables for `in_locale`, resolved by its language part
    /// ("en_GB" uses the "en" tables).
    fn names_in(&self, in_locale: &str) -> Option<&ComponentNames> {
        let language = LocaleComponents::parse(in_locale).language?;
        self.names.get(&language)
    }
}

impl LocaleNames for LocaleCatalog {
    fn display_name(&self, component: LocaleComponent, code: &str, in_locale: &str) -> Option<String> {
        self.names_in(in_locale)?.table(component).get(code).cloned()
    }

    fn available_identifiers(&self) -> Vec<String> {
        self.identifiers.clone()
    }
}
