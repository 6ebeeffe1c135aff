use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("unsupported language code `{0}` (expected one of: en, es, pt)")]
    UnsupportedLanguage(String),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
