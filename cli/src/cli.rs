//! CLI argument definitions for the `caixa` binary.
//!
//! Kept apart from the entrypoint so the binary stays focused on
//! orchestration and tests can build argument values directly.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Browse the Caixa finance dashboard from the terminal.
#[derive(Parser, Debug)]
#[command(name = "caixa")]
#[command(version, about)]
#[command(after_help = concat!(
    "LANGUAGES:\n",
    "  pt-BR  Português (Brasil)\n",
    "  pt-PT  Português (Portugal)\n",
    "  en     English\n",
    "  cs     Čeština\n",
    "  is     Íslenska\n\n",
    "EXAMPLES:\n",
    "  Show the month summary in Czech without changing the saved language:\n",
    "    $ caixa --language cs summary\n\n",
    "  Remember European Portuguese for future runs:\n",
    "    $ caixa language set pt-PT\n\n",
    "  Show the cash balance in Icelandic:\n",
    "    $ caixa --language is balance\n\n",
    "  Search the expense list:\n",
    "    $ caixa expenses --search utilidades",
))]
pub struct Cli {
    /// Configuration file [default: ./caixa.toml when present].
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Use this language for one run without saving it.
    #[arg(long, global = true, value_name = "TAG")]
    pub language: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the supported languages.
    Languages(LanguagesArgs),

    /// Show or change the active language.
    #[command(subcommand)]
    Language(LanguageCommand),

    /// Show the header and the month summary cards.
    Summary,

    /// List expenses with their count and total.
    Expenses(ExpensesArgs),

    /// Show the cash balance, its evolution, and recent transactions.
    Balance,

    /// Inspect the translation catalog.
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

/// Arguments for the `languages` command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagesArgs {
    /// Output in JSON format for scripting.
    #[arg(long)]
    pub json: bool,
}

/// Language subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LanguageCommand {
    /// Print the active language and where it came from.
    Show,

    /// Switch to a language and remember it.
    Set {
        /// Language tag such as `pt-BR` or `cs`.
        tag: String,
    },
}

/// Arguments for the `expenses` command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensesArgs {
    /// Only show expenses whose description or category contains this text.
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,
}

/// Catalog subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    /// Report keys missing from, or unknown to, each language.
    Check,
}
