//! End-to-end runs that share a preference directory between invocations.

use std::fs;

use caixa::SharedConfig;
use caixa_cli::cli::Cli;
use caixa_cli::commands::{build_translator, run};
use caixa_common::{Language, LanguageSource, PREFERENCE_KEY};
use camino::Utf8PathBuf;
use clap::Parser;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

#[fixture]
fn workspace() -> Workspace {
    let dir = tempfile::tempdir().expect("temporary directory");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("UTF-8 path");
    let config_path = root.join("caixa.toml");
    fs::write(
        &config_path,
        format!("preference_dir = \"{}\"\nlocale = \"en_US.UTF-8\"\n", root.join("prefs")),
    )
    .expect("write configuration");

    Workspace {
        _dir: dir,
        root,
        config_path,
    }
}

fn invoke(workspace: &Workspace, args: &[&str]) -> String {
    let mut argv = vec!["caixa", "--config", workspace.config_path.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");

    let config = SharedConfig::load(cli.config.as_deref()).expect("configuration should load");
    let mut translator =
        build_translator(&config, cli.language.as_deref()).expect("translator should build");
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    run(&cli.command, &mut translator, &mut stdout, &mut stderr).expect("command should succeed");

    String::from_utf8(stdout).expect("stdout was not UTF-8")
}

#[rstest]
fn configured_locale_seeds_the_first_run(workspace: Workspace) {
    let output = invoke(&workspace, &["language", "show"]);

    assert_eq!(output.trim_end(), "English (en) [environment locale]");
}

#[rstest]
fn saved_languages_apply_to_later_runs(workspace: Workspace) {
    invoke(&workspace, &["language", "set", "cs"]);

    let output = invoke(&workspace, &["summary"]);

    assert!(output.contains("Měsíční souhrn"));
    assert!(output.contains("12 450,00 Kč"));
    assert_eq!(
        fs::read_to_string(workspace.root.join("prefs").join(PREFERENCE_KEY))
            .expect("preference file"),
        "cs"
    );
}

#[rstest]
fn one_shot_overrides_leave_the_saved_language_alone(workspace: Workspace) {
    invoke(&workspace, &["language", "set", "pt-BR"]);

    let overridden = invoke(&workspace, &["--language", "is", "expenses", "--search", "luz"]);
    let afterwards = invoke(&workspace, &["language", "show"]);

    assert!(overridden.contains("Samtals: 380,00 kr."));
    assert_eq!(afterwards.trim_end(), "Português (Brasil) (pt-BR) [persisted preference]");
}

#[test]
fn persisted_selection_reports_its_source() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("UTF-8 path");
    fs::write(root.join(PREFERENCE_KEY), "is\n").expect("seed preference");
    let config = SharedConfig {
        preference_dir: Some(root),
        ..SharedConfig::default()
    };

    let translator = build_translator(&config, None).expect("translator should build");

    assert_eq!(translator.language(), Language::Is);
    assert_eq!(translator.source(), LanguageSource::Persisted);
}
