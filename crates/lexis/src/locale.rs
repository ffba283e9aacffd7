// Locale display names: "<language> (<script>, <region>, <variant>)"

use lexis_core::{LocaleComponent, LocaleNames};

use crate::error::LocaleError;

const QUALIFIERS: [LocaleComponent; 3] = [
    LocaleComponent::Script,
    LocaleComponent::Region,
    LocaleComponent::Variant,
];

/// The display name of a locale identifier, written in `in_locale`.
///
/// Qualifiers that have no display name are left out, and so are the
/// parentheses when none resolve. `None` when the language itself cannot
/// be named.
pub fn display_name<N>(names: &N, identifier: &str, in_locale: &str) -> Option<String>
where
    N: LocaleNames + ?Sized,
{
    let components = names.decompose(identifier);
    let language = components
        .language
        .as_deref()
        .and_then(|code| names.display_name(LocaleComponent::Language, code, in_locale))?;

    let qualifiers: Vec<String> = QUALIFIERS
        .into_iter()
        .filter_map(|component| {
            let code = components.get(component)?;
            names.display_name(component, code, in_locale)
        })
        .collect();

    if qualifiers.is_empty() {
        Some(language)
    } else {
        Some(format!("{language} ({})", qualifiers.join(", ")))
    }
}

/// Every known locale identifier with its display name, sorted by
/// identifier.
pub fn available_locales<N>(names: &N, in_locale: &str) -> Result<Vec<(String, String)>, LocaleError>
where
    N: LocaleNames + ?Sized,
{
    let mut locales = names
        .available_identifiers()
        .into_iter()
        .map(|identifier| match display_name(names, &identifier, in_locale) {
            Some(name) => Ok((identifier, name)),
            None => Err(LocaleError::UnresolvedLanguage { identifier }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    locales.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(locales)
}
