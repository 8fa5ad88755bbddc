//! Caixa CLI entrypoint.
//!
//! Loads `caixa.toml`, picks the language for this run, and renders the
//! requested dashboard view or language command.

use std::io::Write;

use caixa::SharedConfig;
use caixa_cli::cli::Cli;
use caixa_cli::commands::{self, build_translator};
use caixa_cli::error::Result;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    let config = SharedConfig::load(cli.config.as_deref())?;
    let mut translator = build_translator(&config, cli.language.as_deref())?;

    commands::run(&cli.command, &mut translator, stdout, stderr)
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
