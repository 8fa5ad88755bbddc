//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes step parameter wrappers that parse language tags and language
//! sources from scenario text, so every suite interprets them the same way.

use std::convert::Infallible;
use std::str::FromStr;

use caixa_common::LanguageSource;

/// Wrapper for language tags supplied via behaviour-driven test steps.
#[derive(Clone, Debug)]
pub struct StepLanguage {
    raw: String,
}

impl FromStr for StepLanguage {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''))
            .to_owned();

        Ok(Self { raw })
    }
}

impl StepLanguage {
    /// Consumes the step value, yielding the parsed string.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

/// Wrapper mapping scenario wording onto [`LanguageSource`].
#[derive(Debug)]
pub struct StepSource(LanguageSource);

impl FromStr for StepSource {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "persisted" => Ok(Self(LanguageSource::Persisted)),
            "environment" => Ok(Self(LanguageSource::Environment)),
            "default" => Ok(Self(LanguageSource::Default)),
            "explicit" => Ok(Self(LanguageSource::Explicit)),
            other => Err(format!("unknown language source '{other}'")),
        }
    }
}

impl StepSource {
    /// Consumes the step value, yielding the language source.
    pub const fn into_inner(self) -> LanguageSource {
        self.0
    }
}
