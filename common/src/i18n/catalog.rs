//! Embedded translation catalog.
//!
//! Each language's dictionary is a TOML document of nested tables. Loading
//! flattens the tables into dotted keys, so `[balance.adjust] title = "..."`
//! becomes `balance.adjust.title`. Only string leaves are accepted.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use log::error;
use once_cell::sync::Lazy;
use toml::{Table, Value};

use super::{I18nError, Language, TranslationKey};

static EMBEDDED_SOURCES: [(Language, &str); 5] = [
    (Language::PtBr, include_str!("../../locales/pt-BR.toml")),
    (Language::PtPt, include_str!("../../locales/pt-PT.toml")),
    (Language::En, include_str!("../../locales/en.toml")),
    (Language::Cs, include_str!("../../locales/cs.toml")),
    (Language::Is, include_str!("../../locales/is.toml")),
];

static EMBEDDED: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::load_embedded()));

/// Flat mapping from dotted key to template string for one language.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Parse a TOML locale resource for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MalformedCatalog`] when the source is not valid
    /// TOML or a leaf value is not a string.
    pub fn parse(language: Language, source: &str) -> Result<Self, I18nError> {
        let table: Table = toml::from_str(source).map_err(|error| I18nError::MalformedCatalog {
            locale: language.tag().to_owned(),
            reason: error.message().to_owned(),
        })?;

        let mut entries = HashMap::new();
        flatten_into(language, "", &table, &mut entries)?;
        Ok(Self { entries })
    }

    /// Returns the template stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the dictionary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the dotted keys present in the dictionary.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

fn flatten_into(
    language: Language,
    prefix: &str,
    table: &Table,
    entries: &mut HashMap<String, String>,
) -> Result<(), I18nError> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match value {
            Value::String(text) => {
                entries.insert(key, text.clone());
            }
            Value::Table(nested) => flatten_into(language, &key, nested, entries)?,
            other => {
                return Err(I18nError::MalformedCatalog {
                    locale: language.tag().to_owned(),
                    reason: format!("`{key}` holds a {} instead of a string", other.type_str()),
                });
            }
        }
    }

    Ok(())
}

/// Immutable mapping from [`Language`] to its [`Dictionary`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    dictionaries: HashMap<Language, Dictionary>,
}

impl Catalog {
    /// Shared handle to the catalog embedded in the binary.
    ///
    /// The resources are parsed on first use. A resource that fails to parse
    /// is logged and replaced by an empty dictionary, so lookups for that
    /// language fall back to [`DEFAULT_LANGUAGE`](super::DEFAULT_LANGUAGE).
    ///
    /// ```
    /// use caixa_common::i18n::{Catalog, Language};
    ///
    /// let catalog = Catalog::embedded();
    /// assert_eq!(catalog.lookup(Language::En, "tabs.balance"), Some("Balance"));
    /// ```
    #[must_use]
    pub fn embedded() -> Arc<Self> {
        Arc::clone(&EMBEDDED)
    }

    /// Build a catalog from TOML sources, failing on the first malformed one.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MalformedCatalog`] naming the offending language.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Language, &'a str)>,
    ) -> Result<Self, I18nError> {
        sources
            .into_iter()
            .map(|(language, source)| Dictionary::parse(language, source).map(|d| (language, d)))
            .collect::<Result<HashMap<_, _>, _>>()
            .map(|dictionaries| Self { dictionaries })
    }

    fn load_embedded() -> Self {
        let dictionaries = EMBEDDED_SOURCES
            .iter()
            .map(|(language, source)| {
                let dictionary = Dictionary::parse(*language, source).unwrap_or_else(|err| {
                    error!(target: "i18n::catalog", "{err}; using an empty dictionary");
                    Dictionary::default()
                });
                (*language, dictionary)
            })
            .collect();

        Self { dictionaries }
    }

    /// Returns the dictionary for `language`, if the catalog carries one.
    #[must_use]
    pub fn dictionary(&self, language: Language) -> Option<&Dictionary> {
        self.dictionaries.get(&language)
    }

    /// Returns the template for `key` in `language` without any fallback.
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.dictionary(language)
            .and_then(|dictionary| dictionary.get(key))
    }

    /// Compare every dictionary against [`TranslationKey::ALL`].
    ///
    /// A language absent from the catalog reports every key as missing.
    #[must_use]
    pub fn audit(&self) -> CatalogAudit {
        let empty = Dictionary::default();
        let gaps = Language::ALL
            .into_iter()
            .filter_map(|language| {
                let dictionary = self.dictionary(language).unwrap_or(&empty);
                LanguageGaps::between(language, dictionary)
            })
            .collect();

        CatalogAudit { gaps }
    }
}

impl FromIterator<(Language, Dictionary)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (Language, Dictionary)>>(iter: I) -> Self {
        Self {
            dictionaries: iter.into_iter().collect(),
        }
    }
}

/// Keys one language lacks or carries beyond the known set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LanguageGaps {
    /// Language the gaps belong to.
    pub language: Language,
    /// Known keys absent from the dictionary, in declaration order.
    pub missing: Vec<TranslationKey>,
    /// Dictionary keys outside the known set, sorted.
    pub unknown: Vec<String>,
}

impl LanguageGaps {
    fn between(language: Language, dictionary: &Dictionary) -> Option<Self> {
        let missing: Vec<TranslationKey> = TranslationKey::ALL
            .iter()
            .copied()
            .filter(|key| dictionary.get(key.as_str()).is_none())
            .collect();
        let unknown: Vec<String> = dictionary
            .keys()
            .filter(|key| TranslationKey::from_key(key).is_none())
            .map(str::to_owned)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if missing.is_empty() && unknown.is_empty() {
            None
        } else {
            Some(Self {
                language,
                missing,
                unknown,
            })
        }
    }
}

/// Result of [`Catalog::audit`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CatalogAudit {
    gaps: Vec<LanguageGaps>,
}

impl CatalogAudit {
    /// Whether every language covers exactly the known key set.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Languages with at least one gap, in selector order.
    #[must_use]
    pub fn gaps(&self) -> &[LanguageGaps] {
        &self.gaps
    }
}
