use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::language::Language;
use crate::locale::resolve_language;

const MAX_SETTINGS_BYTES: usize = 16 * 1024;

/// Locale preference as found in the host's configuration.
///
/// ```yaml
/// locale: pt-BR
/// ```
///
/// Unknown keys are ignored so the block can live inside a larger document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub locale: Option<String>,
}

impl LocaleSettings {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
        }
    }

    /// Parse settings from a YAML mapping. An empty document yields the defaults.
    pub fn from_yaml_str(src: &str) -> Result<Self, SettingsError> {
        if src.len() > MAX_SETTINGS_BYTES {
            return Err(SettingsError::Yaml(format!(
                "document is too long (max {MAX_SETTINGS_BYTES} bytes)"
            )));
        }
        if src.trim().is_empty() {
            return Ok(Self::default());
        }

        let value = serde_yaml::from_str::<serde_yaml::Value>(src)
            .map_err(|e| SettingsError::Yaml(format!("yaml parse error: {e}")))?;
        match value {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(_) => {
                let settings: Self = serde_yaml::from_value(value)
                    .map_err(|e| SettingsError::Yaml(e.to_string()))?;
                debug!(locale = ?settings.locale, "loaded locale settings");
                Ok(settings)
            }
            _ => Err(SettingsError::Yaml("settings must be a yaml mapping".to_string())),
        }
    }

    /// The configured language, or [`Language::DEFAULT`] when no locale is set.
    pub fn language(&self) -> Language {
        self.locale
            .as_deref()
            .map(resolve_language)
            .unwrap_or(Language::DEFAULT)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("locale settings error: {0}")]
    Yaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_locale() {
        let settings = LocaleSettings::from_yaml_str("locale: pt-BR\n").unwrap();
        assert_eq!(settings, LocaleSettings::new("pt-BR"));
        assert_eq!(settings.language(), Language::Pt);
    }

    #[test]
    fn missing_locale_defaults_to_english() {
        for src in ["", "   \n", "~", "other: 1"] {
            let settings = LocaleSettings::from_yaml_str(src).unwrap();
            assert_eq!(settings.locale, None, "{src:?}");
            assert_eq!(settings.language(), Language::En);
        }
    }

    #[test]
    fn unsupported_locale_resolves_to_default() {
        let settings = LocaleSettings::from_yaml_str("locale: ES").unwrap();
        assert_eq!(settings.language(), Language::En);
    }

    #[test]
    fn non_mapping_is_rejected() {
        let err = LocaleSettings::from_yaml_str("- es\n- pt\n").unwrap_err();
        assert!(matches!(err, SettingsError::Yaml(_)));
    }

    #[test]
    fn locale_must_be_a_string() {
        let err = LocaleSettings::from_yaml_str("locale: [es]").unwrap_err();
        assert!(matches!(err, SettingsError::Yaml(_)));
    }

    #[test]
    fn oversized_document_is_rejected() {
        let src = format!("locale: {}", "e".repeat(MAX_SETTINGS_BYTES));
        assert!(LocaleSettings::from_yaml_str(&src).is_err());
    }
}
