//! Persistence boundary for the language preference.
//!
//! A store is a tiny key/value map holding plain-text scalars. The file-backed
//! store keeps one file per key under a directory, by default the platform
//! configuration directory for Caixa.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use directories_next::ProjectDirs;
use log::debug;

use super::StoreError;

/// Key/value persistence used for the language preference.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Whether saved values outlive the current process.
    fn is_persistent(&self) -> bool {
        true
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }

    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

/// Store that keeps values for the lifetime of the process only.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Create a store pre-populated with `key = value`.
    ///
    /// ```
    /// use caixa_common::i18n::{MemoryPreferenceStore, PreferenceStore};
    ///
    /// let store = MemoryPreferenceStore::with_value("app-language", "cs");
    /// assert_eq!(store.load("app-language").ok().flatten().as_deref(), Some("cs"));
    /// ```
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values }
    }

    /// Returns the stored value for `key` without going through the trait.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

/// Store that writes each key to its own file under a root directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilePreferenceStore {
    root: Utf8PathBuf,
}

impl FilePreferenceStore {
    /// Create a store rooted at `root`. The directory is created on first save.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store in the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when no home directory can be
    /// determined or the directory path is not valid UTF-8.
    pub fn in_config_dir() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "caixa").ok_or_else(|| StoreError::Unavailable {
            reason: "could not determine the configuration directory".to_owned(),
        })?;
        let root = Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).map_err(|path| {
            StoreError::Unavailable {
                reason: format!("configuration directory {} is not valid UTF-8", path.display()),
            }
        })?;

        Ok(Self::new(root))
    }

    /// Directory holding the preference files.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<Utf8PathBuf, StoreError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StoreError::Unavailable {
                reason: format!("`{key}` is not usable as a preference file name"),
            });
        }
        Ok(self.root.join(key))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents.trim().to_owned())),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: key.to_owned(),
                path,
                source,
            }),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let write_error = |source| StoreError::Write {
            key: key.to_owned(),
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(write_error)?;
        fs::write(&path, value).map_err(write_error)?;
        debug!(target: "i18n::store", "saved `{key}` to {path}");
        Ok(())
    }
}
