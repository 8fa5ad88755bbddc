use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use time::Date;

use super::{
    Arguments, Catalog, DEFAULT_LANGUAGE, I18nError, Language, LanguageSelection, LanguageSource,
    PREFERENCE_KEY, PreferenceStore, format_currency, format_date, initialize, interpolate,
};

/// Handle returned by [`Translator::subscribe`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Language)>;

/// Owns the active language for one consumer tree and resolves strings for it.
///
/// Each translator is independent: two instances never share language state,
/// so tests and embedders can run several side by side. Only the embedded
/// catalog, which is immutable, is shared.
pub struct Translator<S> {
    catalog: Arc<Catalog>,
    store: S,
    language: Language,
    source: LanguageSource,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: PreferenceStore> Translator<S> {
    /// Create a translator over the embedded catalog.
    ///
    /// The starting language comes from [`initialize`] using `store` and
    /// `environment_locale`.
    ///
    /// ```
    /// use caixa_common::i18n::{Language, MemoryPreferenceStore, Translator};
    ///
    /// let mut translator = Translator::new(MemoryPreferenceStore::default(), Some("en-US"));
    /// assert_eq!(translator.language(), Language::En);
    ///
    /// translator.set_language(Language::Cs);
    /// assert_eq!(translator.resolve("tabs.balance"), "Zůstatek");
    /// assert_eq!(translator.store().get("app-language"), Some("cs"));
    /// ```
    pub fn new(store: S, environment_locale: Option<&str>) -> Self {
        Self::with_catalog(Catalog::embedded(), store, environment_locale)
    }

    /// Create a translator over a caller-supplied catalog.
    pub fn with_catalog(catalog: Arc<Catalog>, store: S, environment_locale: Option<&str>) -> Self {
        let selection = initialize(&store, environment_locale);
        selection.log_outcome("i18n::resolver");
        Self::from_selection(catalog, store, &selection)
    }

    /// Create a translator with a fixed starting language, bypassing the
    /// store and environment. Nothing is persisted until
    /// [`set_language`](Self::set_language) is called.
    pub fn with_language(store: S, language: Language) -> Self {
        let selection = LanguageSelection::new(language, LanguageSource::Explicit, None);
        Self::from_selection(Catalog::embedded(), store, &selection)
    }

    fn from_selection(catalog: Arc<Catalog>, store: S, selection: &LanguageSelection) -> Self {
        Self {
            catalog,
            store,
            language: selection.language(),
            source: selection.source(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Re-run start-up selection against the current store.
    ///
    /// This reads the store only and leaves the active language untouched.
    pub fn initialize(&self, environment_locale: Option<&str>) -> LanguageSelection {
        initialize(&self.store, environment_locale)
    }

    /// Switch the active language, persist it, and notify subscribers.
    ///
    /// Persistence is best effort: a failing store is logged and the
    /// in-memory change still applies. Subscribers run synchronously, in
    /// subscription order, before this method returns.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.source = LanguageSource::Explicit;

        if let Err(error) = self.store.save(PREFERENCE_KEY, language.tag()) {
            warn!(
                target: "i18n::resolver",
                "could not persist language `{language}`: {error}; keeping it for this session only",
            );
        }

        for (_, subscriber) in &mut self.subscribers {
            subscriber(language);
        }
    }

    /// Parse `tag` and switch to it.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnknownLanguage`] for an unsupported tag. The
    /// active language, the store, and subscribers are left untouched.
    pub fn set_language_tag(&mut self, tag: &str) -> Result<Language, I18nError> {
        let language = tag.parse::<Language>().map_err(|error| {
            warn!(target: "i18n::resolver", "rejecting language change: {error}");
            error
        })?;
        self.set_language(language);
        Ok(language)
    }

    /// Register `subscriber` to receive every language change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(Language) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(candidate, _)| *candidate != id);
        self.subscribers.len() != before
    }

    /// Consume the translator, yielding its store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S> Translator<S> {
    /// Returns the active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns where the active language came from.
    #[must_use]
    pub const fn source(&self) -> LanguageSource {
        self.source
    }

    /// Returns the backing preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the catalog used for lookups.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve `key` in the active language.
    ///
    /// Falls back to [`DEFAULT_LANGUAGE`], then to the key itself, so the
    /// result is never empty for a non-empty key.
    ///
    /// ```
    /// use caixa_common::i18n::{Language, MemoryPreferenceStore, TranslationKey, Translator};
    ///
    /// let translator = Translator::with_language(MemoryPreferenceStore::default(), Language::Is);
    /// assert_eq!(translator.resolve(TranslationKey::TabsBalance), "Staða");
    /// assert_eq!(translator.resolve("nonexistent.key"), "nonexistent.key");
    /// ```
    #[must_use]
    pub fn resolve(&self, key: impl AsRef<str>) -> String {
        let key = key.as_ref();
        self.template(key).unwrap_or(key).to_owned()
    }

    /// Resolve `key` and substitute `{name}` placeholders from `args`.
    #[must_use]
    pub fn resolve_with_args(&self, key: impl AsRef<str>, args: &Arguments<'_>) -> String {
        let key = key.as_ref();
        interpolate(self.template(key).unwrap_or(key), args)
    }

    /// Render `value` in the active language's currency.
    #[must_use]
    pub fn format_currency(&self, value: f64) -> String {
        format_currency(value, self.language)
    }

    /// Render `date` in the active language's date convention.
    #[must_use]
    pub fn format_date(&self, date: Date) -> String {
        format_date(date, self.language)
    }

    fn template(&self, key: &str) -> Option<&str> {
        if let Some(template) = self.non_empty(self.language, key) {
            return Some(template);
        }

        let fallback = self.non_empty(DEFAULT_LANGUAGE, key);
        debug!(
            target: "i18n::resolver",
            "key `{key}` missing for `{}`; {}",
            self.language,
            if fallback.is_some() {
                "using the default language"
            } else {
                "echoing the key"
            },
        );
        fallback
    }

    // An empty template counts as missing.
    fn non_empty(&self, language: Language, key: &str) -> Option<&str> {
        self.catalog
            .lookup(language, key)
            .filter(|template| !template.is_empty())
    }
}

impl<S: fmt::Debug> fmt::Debug for Translator<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Translator")
            .field("language", &self.language)
            .field("source", &self.source)
            .field("store", &self.store)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
