// Locale identifier decomposition
//
// Identifiers have the shape `ll[_-]Ssss[_-]RR[_-]VARIANT`, where every
// part after the language is optional. Keywords after `@` are ignored.

use serde::{Deserialize, Serialize};

use crate::enums::LocaleComponent;

/// The components of a locale identifier, normalized:
/// language lowercase, script title case, region and variant uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleComponents {
    pub language: Option<String>,
    pub script: Option<String>,
    pub region: Option<String>,
    pub variant: Option<String>,
}

impl LocaleComponents {
    /// Decompose an identifier such as `"zh_Hant_TW"`, `"en-US"` or
    /// `"en_US_POSIX"`.
    ///
    /// Never fails: an empty or malformed language part leaves `language`
    /// unset, and the caller decides what an unresolved language means.
    pub fn parse(identifier: &str) -> Self {
        let identifier = identifier.split('@').next().unwrap_or_default().trim();
        let mut parts = identifier.split(['_', '-']).filter(|p| !p.is_empty());
        let mut components = LocaleComponents::default();

        if let Some(language) = parts.next() {
            if (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic()) {
                components.language = Some(language.to_ascii_lowercase());
            }
        }

        let mut variant_parts: Vec<&str> = Vec::new();
        for part in parts {
            let is_alpha = part.chars().all(|c| c.is_ascii_alphabetic());
            let is_digit = part.chars().all(|c| c.is_ascii_digit());
            if !variant_parts.is_empty() {
                variant_parts.push(part);
            } else if part.len() == 4 && is_alpha && components.script.is_none() && components.region.is_none() {
                components.script = Some(title_case(part));
            } else if ((part.len() == 2 && is_alpha) || (part.len() == 3 && is_digit))
                && components.region.is_none()
            {
                components.region = Some(part.to_ascii_uppercase());
            } else {
                variant_parts.push(part);
            }
        }
        if !variant_parts.is_empty() {
            components.variant = Some(variant_parts.join("_").to_ascii_uppercase());
        }
        components
    }

    /// The code stored for a component, if present.
    pub fn get(&self, component: LocaleComponent) -> Option<&str> {
        match component {
            LocaleComponent::Language => self.language.as_deref(),
            LocaleComponent::Script => self.script.as_deref(),
            LocaleComponent::Region => self.region.as_deref(),
            LocaleComponent::Variant => self.variant.as_deref(),
        }
    }
}

fn title_case(part: &str) -> String {
    let lower = part.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
