//! Localisation core for the Caixa dashboard.
//!
//! The catalog embeds one TOML dictionary per supported language under
//! `locales/`, so screens resolve translated strings without touching the
//! filesystem at runtime. A [`Translator`] owns the active [`Language`] for one
//! consumer tree: it resolves keys with fallback to [`DEFAULT_LANGUAGE`],
//! interpolates `{name}` placeholders, persists language changes through a
//! [`PreferenceStore`], and notifies subscribers synchronously.
//!
//! Start-up selection is handled by [`initialize`], which evaluates the
//! persisted preference, then the environment locale, before settling on the
//! default language. Currency and date rendering live in [`format_currency`]
//! and [`format_date`].

/// Language used when nothing else applies and consulted when the active
/// dictionary lacks a key.
pub const DEFAULT_LANGUAGE: Language = Language::PtBr;

/// Key under which the language preference is persisted.
pub const PREFERENCE_KEY: &str = "app-language";

mod catalog;
mod error;
mod format;
mod interpolate;
mod keys;
mod language;
mod resolver;
mod selection;
mod store;
pub mod testing;

pub use catalog::{Catalog, CatalogAudit, Dictionary, LanguageGaps};
pub use error::{I18nError, StoreError};
pub use format::{Currency, format_currency, format_date};
pub use interpolate::{ArgumentValue, Arguments, interpolate, plural_suffix};
pub use keys::TranslationKey;
pub use language::{Language, available_languages};
pub use resolver::{SubscriptionId, Translator};
pub use selection::{
    LanguageSelection, LanguageSource, infer_from_locale, initialize, normalise_locale,
    system_locale,
};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

#[cfg(test)]
pub(crate) use store::MockPreferenceStore;
