//! Output formatting for language listings, the active selection, and
//! catalog audits.

use caixa_common::{CatalogAudit, Language, LanguageSource, available_languages};
use serde::Serialize;

/// Format the supported languages for human-readable output, marking the
/// active one.
///
/// # Examples
///
/// ```
/// use caixa_cli::output::format_languages_human;
/// use caixa_common::Language;
///
/// let output = format_languages_human(Language::Cs);
/// assert!(output.contains("* cs     Čeština"));
/// ```
#[must_use]
pub fn format_languages_human(active: Language) -> String {
    available_languages()
        .iter()
        .map(|(language, name)| {
            let marker = if *language == active { '*' } else { ' ' };
            format!("{marker} {:<6} {name}", language.tag())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the supported languages as JSON.
///
/// # Examples
///
/// ```
/// use caixa_cli::output::format_languages_json;
/// use caixa_common::Language;
///
/// let json = format_languages_json(Language::En);
/// assert!(json.contains("\"languages\""));
/// ```
#[must_use]
pub fn format_languages_json(active: Language) -> String {
    let json_data = LanguagesJson {
        active: active.tag(),
        languages: available_languages()
            .iter()
            .map(|(language, name)| LanguageEntry {
                tag: language.tag(),
                name: *name,
                active: *language == active,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&json_data).unwrap_or_else(|_| "{}".to_owned())
}

/// JSON-serialisable listing of the supported languages.
#[derive(Debug, Serialize)]
pub struct LanguagesJson {
    /// Tag of the active language.
    pub active: &'static str,
    /// Every supported language in display order.
    pub languages: Vec<LanguageEntry>,
}

/// JSON entry for one language.
#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    /// Language tag.
    pub tag: &'static str,
    /// Native display name.
    pub name: &'static str,
    /// Whether this is the active language.
    pub active: bool,
}

/// Describe the active language and its provenance.
#[must_use]
pub fn format_selection(language: Language, source: LanguageSource) -> String {
    format!(
        "{} ({}) [{source}]",
        language.display_name(),
        language.tag()
    )
}

/// Summarise a catalog audit, one block per language with gaps.
#[must_use]
pub fn format_audit(audit: &CatalogAudit) -> String {
    if audit.is_clean() {
        return String::from("Translation catalog is complete.");
    }

    let mut output = String::new();
    for gaps in audit.gaps() {
        output.push_str(&format!("{}:\n", gaps.language));
        for key in &gaps.missing {
            output.push_str(&format!("  missing: {key}\n"));
        }
        for key in &gaps.unknown {
            output.push_str(&format!("  unknown: {key}\n"));
        }
    }

    output.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use caixa_common::{Catalog, Dictionary};
    use rstest::rstest;

    #[rstest]
    #[case(Language::PtBr, "* pt-BR  Português (Brasil)")]
    #[case(Language::Is, "* is     Íslenska")]
    fn human_listing_marks_the_active_language(#[case] active: Language, #[case] line: &str) {
        let output = format_languages_human(active);

        assert_eq!(output.lines().count(), 5);
        assert!(output.lines().any(|candidate| candidate == line));
        assert_eq!(output.matches('*').count(), 1);
    }

    #[test]
    fn json_listing_flags_exactly_one_language() {
        let json = format_languages_json(Language::Cs);
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["active"], "cs");
        let languages = value["languages"].as_array().expect("languages array");
        assert_eq!(languages.len(), 5);
        assert_eq!(
            languages
                .iter()
                .filter(|entry| entry["active"] == true)
                .count(),
            1
        );
    }

    #[test]
    fn selection_names_its_source() {
        assert_eq!(
            format_selection(Language::En, LanguageSource::Environment),
            "English (en) [environment locale]"
        );
    }

    #[test]
    fn clean_audits_say_so() {
        assert_eq!(
            format_audit(&Catalog::embedded().audit()),
            "Translation catalog is complete."
        );
    }

    #[test]
    fn gaps_are_listed_per_language() {
        let catalog: Catalog = [(
            Language::PtBr,
            Dictionary::from_iter([("tabs.balance", "Saldo"), ("tabs.extra", "Extra")]),
        )]
        .into_iter()
        .collect();

        let output = format_audit(&catalog.audit());

        assert!(output.contains("pt-BR:\n  missing: header.title"));
        assert!(output.contains("  unknown: tabs.extra"));
        assert!(output.contains("cs:\n"));
    }
}
