use tracing::trace;

use crate::language::Language;

/// The primary language subtag: everything before the first `-`.
///
/// No normalization is applied (`en_US` and `EN` are returned as-is).
pub fn primary_subtag(locale: &str) -> &str {
    locale.split_once('-').map_or(locale, |(lang, _)| lang)
}

/// Pick the supported language for a locale tag such as `en-GB` or `pt`.
///
/// - `pt-BR` -> `pt`
/// - `en-US-extra` -> `en`
/// - `ES`, `fr-FR`, `""` -> `en` (the default)
///
/// Matching is exact and case-sensitive. Never fails.
pub fn resolve_language(locale: &str) -> Language {
    let candidate = primary_subtag(locale);
    match Language::from_code(candidate) {
        Some(lang) => lang,
        None => {
            trace!(locale, fallback = %Language::DEFAULT, "unsupported locale, using default language");
            Language::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn region_is_ignored() {
        assert_eq!(resolve_language("en-GB"), Language::En);
        assert_eq!(resolve_language("pt-PT"), Language::Pt);
        assert_eq!(resolve_language("pt-BR"), Language::Pt);
        assert_eq!(resolve_language("es-MX"), Language::Es);
    }

    #[test]
    fn bare_codes() {
        assert_eq!(resolve_language("en"), Language::En);
        assert_eq!(resolve_language("es"), Language::Es);
        assert_eq!(resolve_language("pt"), Language::Pt);
    }

    #[test]
    fn unknown_and_malformed_fall_back_to_english() {
        for loc in ["", "fr", "fr-FR", "ES", "Pt-BR", "es_ES", " es", "-es", "portuguese"] {
            assert_eq!(resolve_language(loc), Language::En, "locale {loc:?}");
        }
    }

    #[test]
    fn splits_on_first_dash_only() {
        assert_eq!(primary_subtag("en-US-extra"), "en");
        assert_eq!(resolve_language("en-US-extra"), Language::En);
        assert_eq!(resolve_language("es-419-x-private"), Language::Es);
    }

    #[test]
    fn primary_subtag_of_empty_is_empty() {
        assert_eq!(primary_subtag(""), "");
        assert_eq!(primary_subtag("-"), "");
    }
}
