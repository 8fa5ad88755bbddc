//! Terminal front end for the Caixa finance dashboard.
//!
//! This crate wires [`caixa::SharedConfig`] and the `caixa-common`
//! translator to a small command set. It is used by the `caixa` binary and
//! can be driven programmatically in tests.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`commands`] - Command dispatch against a translator
//! - [`error`] - Error types mapped to the exit code
//! - [`output`] - Human and JSON output formatting

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
