use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use super::Language;

/// Map of placeholder names to values supplied alongside a lookup.
pub type Arguments<'a> = HashMap<Cow<'a, str>, ArgumentValue<'a>>;

/// Value substituted for a `{name}` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue<'a> {
    /// Text inserted verbatim.
    Text(Cow<'a, str>),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer, typically a count.
    Unsigned(u64),
    /// Floating point number, rendered without a trailing `.0`.
    Float(f64),
}

impl fmt::Display for ArgumentValue<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Unsigned(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
        }
    }
}

impl<'a> From<&'a str> for ArgumentValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for ArgumentValue<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<i32> for ArgumentValue<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for ArgumentValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ArgumentValue<'_> {
    fn from(value: u32) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

impl From<usize> for ArgumentValue<'_> {
    fn from(value: usize) -> Self {
        Self::Unsigned(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl From<f64> for ArgumentValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Replace every `{name}` in `template` whose name appears in `args`.
///
/// The scan is a single left-to-right pass: substituted values are never
/// rescanned, and placeholders without a matching argument stay literal.
///
/// ```
/// use std::borrow::Cow;
/// use caixa_common::i18n::{Arguments, ArgumentValue, interpolate};
///
/// let mut args = Arguments::new();
/// args.insert(Cow::Borrowed("count"), ArgumentValue::from(3_u32));
/// args.insert(Cow::Borrowed("plural"), ArgumentValue::from("{count}"));
///
/// assert_eq!(
///     interpolate("{count} expense{plural} in {month}", &args),
///     "3 expense{count} in {month}"
/// );
/// ```
#[must_use]
pub fn interpolate(template: &str, args: &Arguments<'_>) -> String {
    if args.is_empty() {
        return template.to_owned();
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        output.push_str(literal);
        let after_brace = tail.get(1..).unwrap_or_default();

        match placeholder(after_brace) {
            Some((name, remainder)) => {
                match args.get(name) {
                    Some(value) => output.push_str(&value.to_string()),
                    None => {
                        output.push('{');
                        output.push_str(name);
                        output.push('}');
                    }
                }
                rest = remainder;
            }
            None => {
                output.push('{');
                rest = after_brace;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Split `input` (the text after an opening brace) into a placeholder name and
/// the text after its closing brace. Returns `None` when another opening brace
/// or the end of input comes first.
fn placeholder(input: &str) -> Option<(&str, &str)> {
    let end = input.find(['{', '}'])?;
    let (name, tail) = input.split_at(end);
    tail.strip_prefix('}').map(|remainder| (name, remainder))
}

/// Suffix passed as the `plural` argument of count templates.
///
/// Portuguese and English add `s` for every count other than one. Czech and
/// Icelandic templates receive an empty suffix; their plural rules are not
/// modelled.
///
/// ```
/// use caixa_common::i18n::{Language, plural_suffix};
///
/// assert_eq!(plural_suffix(Language::En, 1), "");
/// assert_eq!(plural_suffix(Language::PtBr, 8), "s");
/// assert_eq!(plural_suffix(Language::Cs, 8), "");
/// ```
#[must_use]
pub const fn plural_suffix(language: Language, count: u64) -> &'static str {
    match language {
        Language::PtBr | Language::PtPt | Language::En if count != 1 => "s",
        _ => "",
    }
}
