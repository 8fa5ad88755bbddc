use std::env;
use std::fmt;

use log::{debug, warn};
use unic_langid::LanguageIdentifier;

use super::{DEFAULT_LANGUAGE, Language, PREFERENCE_KEY, PreferenceStore};

/// Source for the active language.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LanguageSource {
    /// Language read back from the preference store.
    Persisted,
    /// Language inferred from the host environment locale.
    Environment,
    /// Hardcoded default language.
    Default,
    /// Language chosen at runtime through the translator.
    Explicit,
}

impl fmt::Display for LanguageSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persisted => formatter.write_str("persisted preference"),
            Self::Environment => formatter.write_str("environment locale"),
            Self::Default => formatter.write_str("default language"),
            Self::Explicit => formatter.write_str("explicit selection"),
        }
    }
}

/// Outcome of start-up language selection including provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LanguageSelection {
    language: Language,
    source: LanguageSource,
    requested: Option<String>,
}

impl LanguageSelection {
    pub(crate) const fn new(
        language: Language,
        source: LanguageSource,
        requested: Option<String>,
    ) -> Self {
        Self {
            language,
            source,
            requested,
        }
    }

    /// Returns the selected language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns where the language came from.
    #[must_use]
    pub const fn source(&self) -> LanguageSource {
        self.source
    }

    /// Returns the raw value supplied by the winning source, if any.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Emit a debug log summarising the selection.
    pub fn log_outcome(&self, target: &str) {
        debug!(
            target: target,
            "resolved {} to `{}`",
            self.source(),
            self.language(),
        );
    }
}

/// Locale prefixes checked in priority order when inferring a language.
const PREFIX_PRIORITY: [(&str, Language); 5] = [
    ("pt-BR", Language::PtBr),
    ("pt", Language::PtPt),
    ("cs", Language::Cs),
    ("is", Language::Is),
    ("en", Language::En),
];

/// Environment variables consulted by [`system_locale`], highest priority first.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Pick the starting language.
///
/// Candidates are considered in the following order:
///
/// 1. The value persisted under [`PREFERENCE_KEY`], when it names a supported
///    language.
/// 2. The environment locale, matched by prefix (see [`infer_from_locale`]).
/// 3. [`DEFAULT_LANGUAGE`].
///
/// Reading the store is the only side effect; store failures and unrecognised
/// values are logged and treated as an absent preference.
///
/// ```
/// use caixa_common::i18n::{
///     Language, LanguageSource, MemoryPreferenceStore, initialize,
/// };
///
/// let store = MemoryPreferenceStore::default();
/// let selection = initialize(&store, Some("en-US"));
/// assert_eq!(selection.language(), Language::En);
/// assert_eq!(selection.source(), LanguageSource::Environment);
/// ```
pub fn initialize<S>(store: &S, environment_locale: Option<&str>) -> LanguageSelection
where
    S: PreferenceStore + ?Sized,
{
    persisted_selection(store)
        .or_else(|| environment_selection(environment_locale))
        .unwrap_or_else(|| LanguageSelection::new(DEFAULT_LANGUAGE, LanguageSource::Default, None))
}

fn persisted_selection<S>(store: &S) -> Option<LanguageSelection>
where
    S: PreferenceStore + ?Sized,
{
    let stored = store
        .load(PREFERENCE_KEY)
        .map_err(|error| {
            warn!(
                target: "i18n::selection",
                "could not read the language preference: {error}",
            );
        })
        .ok()
        .flatten()?;
    let candidate = normalise_locale(Some(stored.as_str()))?;

    match candidate.parse::<Language>() {
        Ok(language) => Some(LanguageSelection::new(
            language,
            LanguageSource::Persisted,
            Some(candidate.to_owned()),
        )),
        Err(_) => {
            warn!(
                target: "i18n::selection",
                "ignoring unrecognised persisted language `{candidate}`",
            );
            None
        }
    }
}

fn environment_selection(environment_locale: Option<&str>) -> Option<LanguageSelection> {
    let candidate = normalise_locale(environment_locale)?;
    let language = infer_from_locale(candidate)?;

    Some(LanguageSelection::new(
        language,
        LanguageSource::Environment,
        Some(candidate.to_owned()),
    ))
}

/// Map a host locale string onto a supported language by prefix.
///
/// POSIX forms are normalised first (`pt_BR.UTF-8@euro` becomes `pt-BR`), then
/// the prefixes `pt-BR`, `pt`, `cs`, `is`, and `en` are tried in that order.
///
/// ```
/// use caixa_common::i18n::{Language, infer_from_locale};
///
/// assert_eq!(infer_from_locale("pt_BR.UTF-8"), Some(Language::PtBr));
/// assert_eq!(infer_from_locale("pt-AO"), Some(Language::PtPt));
/// assert_eq!(infer_from_locale("de-DE"), None);
/// ```
#[must_use]
pub fn infer_from_locale(locale: &str) -> Option<Language> {
    let candidate = canonical_locale(locale);

    PREFIX_PRIORITY
        .into_iter()
        .find(|(prefix, _)| candidate.starts_with(prefix))
        .map(|(_, language)| language)
}

/// Strip the POSIX codeset and modifier, swap `_` for `-`, and canonicalise
/// casing when the result parses as a language identifier.
fn canonical_locale(locale: &str) -> String {
    let base = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('_', "-");

    base.parse::<LanguageIdentifier>()
        .map_or(base, |identifier| identifier.to_string())
}

/// Read the host locale from `LC_ALL`, `LC_MESSAGES`, then `LANG`.
///
/// Empty values and the `C`/`POSIX` locales are skipped.
#[must_use]
pub fn system_locale() -> Option<String> {
    LOCALE_VARIABLES.into_iter().find_map(|variable| {
        let value = env::var_os(variable)?.into_string().ok()?;
        let trimmed = normalise_locale(Some(value.as_str()))?;
        let base = canonical_locale(trimmed);

        if base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

/// Trim whitespace and discard empty locale candidates.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}
