//! Error types for the Caixa CLI.

use std::io;

use caixa::ConfigError;
use caixa_common::I18nError;
use thiserror::Error;

/// Errors that end a CLI run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A language tag was not one of the supported languages.
    #[error("{source}; run `caixa languages` to see the supported tags")]
    Language {
        /// Underlying rejection.
        #[from]
        source: I18nError,
    },

    /// The catalog audit found gaps.
    #[error("translation catalog has gaps in {languages} language(s)")]
    CatalogGaps {
        /// Number of languages with missing or unknown keys.
        languages: usize,
    },

    /// Writing command output failed.
    #[error("failed to write output: {source}")]
    WriteFailed {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;
