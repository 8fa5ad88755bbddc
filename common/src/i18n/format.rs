//! Locale-aware currency and date rendering.
//!
//! Both entry points are pure: the output depends only on the value and the
//! language. Separators are plain ASCII spaces wherever a locale groups or
//! pads with whitespace.

use time::Date;

use super::Language;

/// Currency shown for each language.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Currency {
    /// Brazilian real.
    Brl,
    /// Euro.
    Eur,
    /// United States dollar.
    Usd,
    /// Czech koruna.
    Czk,
    /// Icelandic króna.
    Isk,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Brl => "BRL",
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Czk => "CZK",
            Self::Isk => "ISK",
        }
    }

    /// Symbol printed next to amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Brl => "R$",
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Czk => "Kč",
            Self::Isk => "kr.",
        }
    }

    /// Digits rendered after the decimal separator.
    #[must_use]
    pub const fn minor_digits(self) -> usize {
        2
    }
}

impl Language {
    /// Currency used when rendering amounts in this language.
    #[must_use]
    pub const fn currency(self) -> Currency {
        match self {
            Self::PtBr => Currency::Brl,
            Self::PtPt => Currency::Eur,
            Self::En => Currency::Usd,
            Self::Cs => Currency::Czk,
            Self::Is => Currency::Isk,
        }
    }
}

enum Placement {
    /// Symbol before the number, joined by `spacing`.
    Prefix { spacing: &'static str },
    /// Symbol after the number, separated by a space.
    Suffix,
}

struct NumberStyle {
    group: &'static str,
    decimal: char,
    /// Grouping applies once the integer part has this many digits beyond
    /// the lowest group of three.
    min_grouping_digits: usize,
    placement: Placement,
}

const fn number_style(language: Language) -> NumberStyle {
    match language {
        Language::PtBr => NumberStyle {
            group: ".",
            decimal: ',',
            min_grouping_digits: 1,
            placement: Placement::Prefix { spacing: " " },
        },
        Language::PtPt => NumberStyle {
            group: " ",
            decimal: ',',
            min_grouping_digits: 2,
            placement: Placement::Suffix,
        },
        Language::En => NumberStyle {
            group: ",",
            decimal: '.',
            min_grouping_digits: 1,
            placement: Placement::Prefix { spacing: "" },
        },
        Language::Cs => NumberStyle {
            group: " ",
            decimal: ',',
            min_grouping_digits: 1,
            placement: Placement::Suffix,
        },
        Language::Is => NumberStyle {
            group: ".",
            decimal: ',',
            min_grouping_digits: 1,
            placement: Placement::Suffix,
        },
    }
}

/// Render `value` in the currency and number conventions of `language`.
///
/// Amounts are rounded to the currency's minor unit, with ties rounded away
/// from zero. Negative amounts carry a leading `-`; an amount that rounds to
/// zero is never signed.
///
/// ```
/// use caixa_common::i18n::{Language, format_currency};
///
/// assert_eq!(format_currency(1500.0, Language::PtBr), "R$ 1.500,00");
/// assert_eq!(format_currency(1500.0, Language::En), "$1,500.00");
/// assert_eq!(format_currency(-750.5, Language::Cs), "-750,50 Kč");
/// ```
#[must_use]
pub fn format_currency(value: f64, language: Language) -> String {
    let currency = language.currency();
    let style = number_style(language);

    let (negative, number) = if value.is_nan() {
        (false, String::from("NaN"))
    } else if value.is_infinite() {
        (value.is_sign_negative(), String::from("∞"))
    } else {
        let digits = currency.minor_digits();
        let fixed = format!("{:.*}", digits, round_to_minor_unit(value.abs(), digits));
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let negative = value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let grouped = group_digits(integer, style.group, style.min_grouping_digits);
        let number = if fraction.is_empty() {
            grouped
        } else {
            format!("{grouped}{}{fraction}", style.decimal)
        };
        (negative, number)
    };

    let sign = if negative { "-" } else { "" };
    let symbol = currency.symbol();
    match style.placement {
        Placement::Prefix { spacing } => format!("{sign}{symbol}{spacing}{number}"),
        Placement::Suffix => format!("{sign}{number} {symbol}"),
    }
}

// `format!` rounds ties to even; `f64::round` rounds them away from zero.
fn round_to_minor_unit(value: f64, digits: usize) -> f64 {
    let scale = (0..digits).fold(1.0_f64, |scale, _| scale * 10.0);
    (value * scale).round() / scale
}

fn group_digits(digits: &str, separator: &str, min_grouping_digits: usize) -> String {
    let len = digits.len();
    if len < 3 + min_grouping_digits {
        return digits.to_owned();
    }

    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Render `date` with the day, month, and year ordering of `language`.
///
/// ```
/// use caixa_common::i18n::{Language, format_date};
/// use time::{Date, Month};
///
/// let date = Date::from_calendar_date(2025, Month::May, 30).expect("valid date");
/// assert_eq!(format_date(date, Language::PtBr), "30/05/2025");
/// assert_eq!(format_date(date, Language::En), "5/30/2025");
/// ```
#[must_use]
pub fn format_date(date: Date, language: Language) -> String {
    let day = date.day();
    let month = u8::from(date.month());
    let year = date.year();

    match language {
        Language::PtBr | Language::PtPt => format!("{day:02}/{month:02}/{year}"),
        Language::En => format!("{month}/{day}/{year}"),
        Language::Cs => format!("{day}. {month}. {year}"),
        Language::Is => format!("{day}.{month}.{year}"),
    }
}
