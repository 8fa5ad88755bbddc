//! Caixa's shared configuration and the text views of its finance dashboard.
//!
//! The localisation core lives in `caixa-common`; this crate wires it to
//! `caixa.toml` and renders the summary, expense, and balance views through a
//! [`caixa_common::Translator`].

pub mod balance;
pub mod config;
pub mod dashboard;

pub use config::{CONFIG_FILE_NAME, ConfigError, SharedConfig};
