//! Localized labels for the OMIE spot-price integration.
//!
//! Sensor and device names are compiled-in tables for English, Spanish and
//! Portuguese. A locale tag from the host configuration picks the table:
//!
//! - the primary subtag (before the first `-`) must be exactly `en`, `es` or `pt`
//! - anything else, including `ES` or an empty string, falls back to English
//!
//! ```
//! use omie_i18n::{entity_names, resolve_language, Language};
//!
//! assert_eq!(resolve_language("pt-BR"), Language::Pt);
//! assert_eq!(entity_names("es").spot_price_es_hour, "Precio marginal (hora) - España");
//! ```
//!
//! Lookups are total: no locale string makes them fail.

mod error;
mod language;
mod locale;
mod names;
mod settings;
mod translated;

pub use error::I18nError;
pub use language::Language;
pub use locale::{primary_subtag, resolve_language};
pub use names::{
    device_names, entity_names, DeviceNames, EntityNames, Granularity, Market, SpotPriceSensor,
    DEVICE_NAMES, ENTITY_NAMES,
};
pub use settings::{LocaleSettings, SettingsError};
pub use translated::Translated;
