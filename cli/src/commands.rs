//! Command implementations.
//!
//! Every command writes to the supplied writers rather than the process
//! streams, so tests can capture output and simulate write failures.

use std::fmt::Display;
use std::io::Write;

use caixa::SharedConfig;
use caixa::balance::{BALANCE_HISTORY, BALANCE_OVERVIEW, TRANSACTIONS, render_balance};
use caixa::dashboard::{EXPENSES, MONTH_SUMMARY, render_expenses, render_summary};
use caixa_common::{Language, MemoryPreferenceStore, PREFERENCE_KEY, PreferenceStore, Translator};
use log::{debug, warn};

use crate::cli::{CatalogCommand, Command, LanguageCommand};
use crate::error::{CliError, Result};
use crate::output::{format_audit, format_languages_human, format_languages_json, format_selection};

/// Preference store chosen at runtime from [`SharedConfig`].
pub type BoxedStore = Box<dyn PreferenceStore>;

/// Builds the translator for one run.
///
/// A `language_override` pins the language for this run without touching the
/// store. Otherwise start-up selection consults the store, then the
/// configured or process locale. When the configured store is unavailable the
/// run falls back to an in-memory store.
///
/// # Errors
///
/// Returns [`CliError::Language`] when the override is not a supported tag.
pub fn build_translator(
    config: &SharedConfig,
    language_override: Option<&str>,
) -> Result<Translator<BoxedStore>> {
    let store = config.preference_store().unwrap_or_else(|error| {
        warn!(target: "caixa::cli", "{error}; language changes will not be remembered");
        Box::new(MemoryPreferenceStore::default())
    });

    match language_override {
        Some(tag) => {
            let language = tag.parse::<Language>()?;
            debug!(target: "caixa::cli", "using `{language}` for this run only");
            Ok(Translator::with_language(store, language))
        }
        None => Ok(Translator::new(store, config.environment_locale().as_deref())),
    }
}

/// Executes `command` against `translator`.
///
/// # Errors
///
/// Returns [`CliError::Language`] for an unsupported tag passed to
/// `language set`, [`CliError::CatalogGaps`] when the catalog audit fails,
/// and [`CliError::WriteFailed`] when output cannot be written.
pub fn run<S: PreferenceStore>(
    command: &Command,
    translator: &mut Translator<S>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Languages(args) => {
            let active = translator.language();
            let output = if args.json {
                format_languages_json(active)
            } else {
                format_languages_human(active)
            };
            write_line(stdout, output)
        }
        Command::Language(LanguageCommand::Show) => write_line(
            stdout,
            format_selection(translator.language(), translator.source()),
        ),
        Command::Language(LanguageCommand::Set { tag }) => {
            set_language(translator, tag, stdout, stderr)
        }
        Command::Summary => write_line(stdout, render_summary(translator, &MONTH_SUMMARY)),
        Command::Expenses(args) => {
            let query = args.search.as_deref().unwrap_or_default();
            write_line(stdout, render_expenses(translator, &EXPENSES, query))
        }
        Command::Balance => write_line(
            stdout,
            render_balance(translator, &BALANCE_OVERVIEW, &BALANCE_HISTORY, &TRANSACTIONS),
        ),
        Command::Catalog(CatalogCommand::Check) => check_catalog(translator, stdout),
    }
}

fn set_language<S: PreferenceStore>(
    translator: &mut Translator<S>,
    tag: &str,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let language = translator.set_language_tag(tag)?;
    write_line(stdout, format_selection(language, translator.source()))?;

    let store = translator.store();
    let saved = store.load(PREFERENCE_KEY).ok().flatten();
    if !store.is_persistent() || saved.as_deref() != Some(language.tag()) {
        write_line(
            stderr,
            "note: the language could not be saved and applies to this run only",
        )?;
    }

    Ok(())
}

fn check_catalog<S>(translator: &Translator<S>, stdout: &mut dyn Write) -> Result<()> {
    let audit = translator.catalog().audit();
    write_line(stdout, format_audit(&audit))?;

    if audit.is_clean() {
        Ok(())
    } else {
        Err(CliError::CatalogGaps {
            languages: audit.gaps().len(),
        })
    }
}

fn write_line(writer: &mut dyn Write, message: impl Display) -> Result<()> {
    writeln!(writer, "{message}").map_err(|source| CliError::WriteFailed { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ExpensesArgs, LanguagesArgs};
    use caixa_common::{FilePreferenceStore, I18nError};
    use caixa_common::i18n::testing::FailingStore;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[fixture]
    fn translator() -> Translator<MemoryPreferenceStore> {
        Translator::with_language(MemoryPreferenceStore::default(), Language::En)
    }

    fn execute<S: PreferenceStore>(
        command: &Command,
        translator: &mut Translator<S>,
    ) -> (Result<()>, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let result = run(command, translator, &mut stdout, &mut stderr);
        (
            result,
            String::from_utf8(stdout).expect("stdout was not UTF-8"),
            String::from_utf8(stderr).expect("stderr was not UTF-8"),
        )
    }

    #[rstest]
    fn languages_lists_every_language(mut translator: Translator<MemoryPreferenceStore>) {
        let command = Command::Languages(LanguagesArgs::default());

        let (result, stdout, _) = execute(&command, &mut translator);

        assert!(result.is_ok());
        assert_eq!(stdout.lines().count(), 5);
        assert!(stdout.contains("* en     English"));
    }

    #[test]
    fn language_set_persists_and_reports() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("UTF-8 path");
        let mut translator =
            Translator::with_language(FilePreferenceStore::new(root.clone()), Language::En);
        let command = Command::Language(LanguageCommand::Set {
            tag: "pt_pt".to_owned(),
        });

        let (result, stdout, stderr) = execute(&command, &mut translator);

        assert!(result.is_ok());
        assert_eq!(stdout.trim_end(), "Português (Portugal) (pt-PT) [explicit selection]");
        assert!(stderr.is_empty(), "{stderr}");
        assert_eq!(
            std::fs::read_to_string(root.join(PREFERENCE_KEY)).expect("saved preference"),
            "pt-PT"
        );
    }

    #[rstest]
    fn in_memory_language_changes_are_flagged(mut translator: Translator<MemoryPreferenceStore>) {
        let command = Command::Language(LanguageCommand::Set {
            tag: "is".to_owned(),
        });

        let (result, _, stderr) = execute(&command, &mut translator);

        assert!(result.is_ok());
        assert_eq!(translator.store().get(PREFERENCE_KEY), Some("is"));
        assert!(stderr.contains("applies to this run only"));
    }

    #[test]
    fn forgetful_configurations_flag_language_changes() {
        let config = SharedConfig {
            remember_language: false,
            ..SharedConfig::default()
        };
        let mut translator = build_translator(&config, None).expect("translator should build");
        let command = Command::Language(LanguageCommand::Set {
            tag: "cs".to_owned(),
        });

        let (result, _, stderr) = execute(&command, &mut translator);

        assert!(result.is_ok());
        assert_eq!(translator.language(), Language::Cs);
        assert!(stderr.contains("applies to this run only"));
    }

    #[rstest]
    fn language_set_rejects_unknown_tags(mut translator: Translator<MemoryPreferenceStore>) {
        let command = Command::Language(LanguageCommand::Set {
            tag: "de".to_owned(),
        });

        let (result, stdout, _) = execute(&command, &mut translator);

        assert!(matches!(
            result,
            Err(CliError::Language {
                source: I18nError::UnknownLanguage { .. }
            })
        ));
        assert!(stdout.is_empty());
        assert_eq!(translator.language(), Language::En);
    }

    #[test]
    fn unsaved_language_changes_are_flagged() {
        let mut translator = Translator::with_language(FailingStore::default(), Language::En);
        let command = Command::Language(LanguageCommand::Set {
            tag: "cs".to_owned(),
        });

        let (result, _, stderr) = execute(&command, &mut translator);

        assert!(result.is_ok());
        assert_eq!(translator.language(), Language::Cs);
        assert!(stderr.contains("applies to this run only"));
    }

    #[rstest]
    fn expenses_apply_the_search(mut translator: Translator<MemoryPreferenceStore>) {
        let command = Command::Expenses(ExpensesArgs {
            search: Some("LUZ".to_owned()),
        });

        let (result, stdout, _) = execute(&command, &mut translator);

        assert!(result.is_ok());
        assert!(stdout.contains("1 expense\n"));
        assert!(stdout.contains("Total: $380.00"));
    }

    #[rstest]
    fn summary_renders_in_the_active_language(mut translator: Translator<MemoryPreferenceStore>) {
        let (result, stdout, _) = execute(&Command::Summary, &mut translator);

        assert!(result.is_ok());
        assert!(stdout.contains("Revenue: $12,450.00"));
    }

    #[rstest]
    #[case(Language::En, "Current Balance: $21,300.00", "+$2,350.75")]
    #[case(Language::Cs, "Aktuální zůstatek: 21 300,00 Kč", "-2 500,00 Kč")]
    #[case(Language::PtPt, "Saldo Atual: 21 300,00 €", "Ajuste de saldo")]
    fn balance_renders_in_the_active_language(
        #[case] language: Language,
        #[case] heading: &str,
        #[case] fragment: &str,
    ) {
        let mut translator = Translator::with_language(MemoryPreferenceStore::default(), language);

        let (result, stdout, _) = execute(&Command::Balance, &mut translator);

        assert!(result.is_ok());
        assert!(stdout.starts_with(heading), "{stdout}");
        assert!(stdout.contains(fragment), "{stdout}");
    }

    #[rstest]
    fn catalog_check_passes_for_the_embedded_catalog(
        mut translator: Translator<MemoryPreferenceStore>,
    ) {
        let (result, stdout, _) = execute(&Command::Catalog(CatalogCommand::Check), &mut translator);

        assert!(result.is_ok());
        assert!(stdout.contains("complete"));
    }

    #[rstest]
    fn write_failures_are_reported(mut translator: Translator<MemoryPreferenceStore>) {
        let mut stderr = Vec::new();

        let result = run(&Command::Summary, &mut translator, &mut FailingWriter, &mut stderr);

        assert!(matches!(result, Err(CliError::WriteFailed { .. })));
    }

    #[test]
    fn overrides_are_not_persisted() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("UTF-8 path");
        let config = SharedConfig {
            preference_dir: Some(root.clone()),
            ..SharedConfig::default()
        };

        let translator = build_translator(&config, Some("is")).expect("override should parse");

        assert_eq!(translator.language(), Language::Is);
        assert!(!root.join(PREFERENCE_KEY).exists());
    }

    #[test]
    fn unsupported_overrides_fail() {
        let outcome = build_translator(&SharedConfig::default(), Some("klingon"));

        assert!(matches!(outcome, Err(CliError::Language { .. })));
    }
}
