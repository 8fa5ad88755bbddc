use camino::Utf8PathBuf;
use thiserror::Error;

/// Error raised when localisation data or input cannot satisfy a caller request.
///
/// Resolution itself never fails; these errors surface at the boundaries where
/// raw strings enter the system.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when a language tag is not one of the supported languages.
    #[error("unsupported language `{tag}`; expected one of pt-BR, pt-PT, en, cs, is")]
    UnknownLanguage {
        /// The rejected tag as supplied by the caller.
        tag: String,
    },
    /// Raised when a locale resource cannot be turned into a dictionary.
    #[error("locale resource for `{locale}` is malformed: {reason}")]
    MalformedCatalog {
        /// Tag of the language whose resource failed to load.
        locale: String,
        /// Description of the parse or schema failure.
        reason: String,
    },
}

/// Errors raised by a [`PreferenceStore`](super::PreferenceStore).
///
/// The translator logs these and carries on with in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored preference could not be read.
    #[error("failed to read preference `{key}` from {path}: {source}")]
    Read {
        /// Preference key being read.
        key: String,
        /// File backing the preference.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The preference could not be written.
    #[error("failed to write preference `{key}` to {path}: {source}")]
    Write {
        /// Preference key being written.
        key: String,
        /// File backing the preference.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// No storage location is available on this host.
    #[error("preference storage unavailable: {reason}")]
    Unavailable {
        /// Description of why storage is unavailable.
        reason: String,
    },
}
