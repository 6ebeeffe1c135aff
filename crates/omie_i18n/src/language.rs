use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::I18nError;

/// A language the OMIE labels are translated into.
///
/// The set is closed: anything else resolves to [`Language::DEFAULT`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    /// All supported languages, in declaration order.
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Pt];

    /// The lowercase ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }

    /// Exact, case-sensitive lookup of a bare language code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Strict parse: only the bare codes `en`, `es` and `pt` are accepted.
///
/// Use [`crate::resolve_language`] for locale tags that should fall back.
impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| I18nError::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_round_trip_through_display() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn from_str_rejects_tags_and_case_variants() {
        for bad in ["", "EN", "pt-BR", "fr", " es"] {
            let err = bad.parse::<Language>().unwrap_err();
            assert!(matches!(err, I18nError::UnsupportedLanguage(ref s) if s == bad));
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::DEFAULT, Language::En);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
        let lang: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(lang, Language::Es);
    }
}
