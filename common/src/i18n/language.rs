//! Supported languages and the ordered selector listing.

use std::fmt;
use std::str::FromStr;

use unic_langid::{LanguageIdentifier, langid};

use super::I18nError;
use super::selection::normalise_locale;

/// One of the five languages the catalog ships.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Language {
    /// Brazilian Portuguese (`pt-BR`).
    PtBr,
    /// European Portuguese (`pt-PT`).
    PtPt,
    /// English (`en`).
    En,
    /// Czech (`cs`).
    Cs,
    /// Icelandic (`is`).
    Is,
}

static AVAILABLE_LANGUAGES: [(Language, &str); 5] = [
    (Language::PtBr, "Português (Brasil)"),
    (Language::PtPt, "Português (Portugal)"),
    (Language::En, "English"),
    (Language::Cs, "Čeština"),
    (Language::Is, "Íslenska"),
];

impl Language {
    /// Every supported language in selector order.
    pub const ALL: [Self; 5] = [Self::PtBr, Self::PtPt, Self::En, Self::Cs, Self::Is];

    /// Returns the BCP 47 tag persisted and displayed for this language.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::PtPt => "pt-PT",
            Self::En => "en",
            Self::Cs => "cs",
            Self::Is => "is",
        }
    }

    /// Returns the language's name written in that language.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PtBr => "Português (Brasil)",
            Self::PtPt => "Português (Portugal)",
            Self::En => "English",
            Self::Cs => "Čeština",
            Self::Is => "Íslenska",
        }
    }

    /// Returns the parsed language identifier for this language.
    #[must_use]
    pub fn identifier(self) -> LanguageIdentifier {
        match self {
            Self::PtBr => langid!("pt-BR"),
            Self::PtPt => langid!("pt-PT"),
            Self::En => langid!("en"),
            Self::Cs => langid!("cs"),
            Self::Is => langid!("is"),
        }
    }
}

/// Ordered `(language, display name)` pairs for a language selector.
///
/// The order is fixed and matches the dashboard's selector.
///
/// ```
/// use caixa_common::i18n::{Language, available_languages};
///
/// let first = available_languages()[0];
/// assert_eq!(first, (Language::PtBr, "Português (Brasil)"));
/// assert_eq!(available_languages().len(), 5);
/// ```
#[must_use]
pub fn available_languages() -> &'static [(Language, &'static str)] {
    &AVAILABLE_LANGUAGES
}

impl fmt::Display for Language {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    /// Parse a tag, accepting any casing or separator the language identifier
    /// parser canonicalises to a supported tag (`pt_br` becomes `pt-BR`).
    /// Region-qualified variants such as `en-US` are rejected.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let unknown = || I18nError::UnknownLanguage {
            tag: input.to_owned(),
        };
        let candidate = normalise_locale(Some(input)).ok_or_else(unknown)?;
        let identifier: LanguageIdentifier = candidate.parse().map_err(|_| unknown())?;

        Self::ALL
            .into_iter()
            .find(|language| language.identifier() == identifier)
            .ok_or_else(unknown)
    }
}
