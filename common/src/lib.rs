//! Localisation core shared by the Caixa crates: the embedded translation
//! catalog, the language resolver and its persistence boundary, and
//! locale-aware currency and date formatting.

pub mod i18n;

pub use i18n::{
    ArgumentValue, Arguments, Catalog, CatalogAudit, Currency, DEFAULT_LANGUAGE, Dictionary,
    FilePreferenceStore, I18nError, Language, LanguageGaps, LanguageSelection, LanguageSource,
    MemoryPreferenceStore, PREFERENCE_KEY, PreferenceStore, StoreError, SubscriptionId,
    TranslationKey, Translator, available_languages, format_currency, format_date,
    infer_from_locale, initialize, interpolate, normalise_locale, plural_suffix, system_locale,
};
