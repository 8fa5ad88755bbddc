//! Workspace-wide configuration loaded from `caixa.toml`.
//!
//! The dashboard keeps its settings in a small TOML file. `SharedConfig`
//! captures where the language preference lives, whether it is remembered at
//! all, and an optional locale that stands in for the process environment when
//! the resolver picks a first language. Every field has a default, so a
//! missing file behaves exactly like an empty one.

use std::fs;
use std::io;

use caixa_common::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError, normalise_locale,
    system_locale,
};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "caixa.toml";

/// Errors raised while loading [`SharedConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read configuration from {path}: {source}")]
    Read {
        /// File that failed to load.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration file is not valid for [`SharedConfig`].
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: toml::de::Error,
    },
}

/// Shared configuration for the Caixa crates.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfig {
    /// Directory holding the language preference.
    ///
    /// When absent the platform configuration directory for Caixa is used.
    pub preference_dir: Option<Utf8PathBuf>,
    /// Whether language changes survive a restart.
    ///
    /// Disabling this keeps the preference in memory for the current process.
    #[serde(default = "SharedConfig::default_remember_language")]
    pub remember_language: bool,
    /// Locale consulted in place of `LC_ALL`, `LC_MESSAGES`, and `LANG`.
    ///
    /// The resolver trims whitespace and ignores blank values, so
    /// `locale = ""` falls back cleanly to the process environment.
    pub locale: Option<String>,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            preference_dir: None,
            remember_language: Self::default_remember_language(),
            locale: None,
        }
    }
}

impl SharedConfig {
    const fn default_remember_language() -> bool {
        true
    }

    /// Loads the configuration for the current working directory.
    ///
    /// An explicit path must exist. Without one, [`CONFIG_FILE_NAME`] is read
    /// when present and defaults apply otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the chosen file cannot be read or parsed.
    pub fn load(explicit: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        Self::load_with(explicit, Utf8Path::new(CONFIG_FILE_NAME))
    }

    /// Loads configuration from `explicit`, else from `fallback` when it
    /// exists, else returns the defaults.
    ///
    /// ```
    /// use caixa::SharedConfig;
    /// use camino::Utf8Path;
    ///
    /// let config = SharedConfig::load_with(None, Utf8Path::new("missing/caixa.toml"))
    ///     .unwrap_or_default();
    /// assert!(config.remember_language);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the chosen file cannot be read or parsed.
    pub fn load_with(explicit: Option<&Utf8Path>, fallback: &Utf8Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None if fallback.is_file() => Self::from_path(fallback),
            None => Ok(Self::default()),
        }
    }

    /// Reads and parses a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the configured locale override, if present.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }

    /// Returns the locale used to seed language selection: the configured
    /// override, else the process environment.
    #[must_use]
    pub fn environment_locale(&self) -> Option<String> {
        self.locale().map(str::to_owned).or_else(system_locale)
    }

    /// Builds the preference store these settings describe.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when persistence is enabled, no
    /// directory is configured, and the platform has no configuration
    /// directory.
    pub fn preference_store(&self) -> Result<Box<dyn PreferenceStore>, StoreError> {
        if !self.remember_language {
            return Ok(Box::new(MemoryPreferenceStore::default()));
        }

        let store = self
            .preference_dir
            .as_ref()
            .map_or_else(FilePreferenceStore::in_config_dir, |dir| {
                Ok(FilePreferenceStore::new(dir.clone()))
            })?;

        Ok(Box::new(store))
    }
}
