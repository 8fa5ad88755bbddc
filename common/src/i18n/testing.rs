//! Test doubles shared by the localisation suites and downstream crates.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Language, PreferenceStore, StoreError};

/// Store whose reads and writes always fail.
///
/// Exercises the paths where the preference cannot be remembered.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FailingStore {
    attempted_saves: Vec<String>,
}

impl FailingStore {
    /// Values the translator tried to persist, in call order.
    #[must_use]
    pub fn attempted_saves(&self) -> &[String] {
        &self.attempted_saves
    }
}

impl PreferenceStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable {
            reason: "storage disabled for this test".to_owned(),
        })
    }

    fn save(&mut self, _key: &str, value: &str) -> Result<(), StoreError> {
        self.attempted_saves.push(value.to_owned());
        Err(StoreError::Unavailable {
            reason: "storage disabled for this test".to_owned(),
        })
    }
}

/// Subscriber recording every language it is notified about.
///
/// Clones share the same log, so one clone can be handed to
/// [`Translator::subscribe`](super::Translator::subscribe) while the test keeps
/// another for assertions.
#[derive(Clone, Debug, Default)]
pub struct RecordingSubscriber {
    seen: Rc<RefCell<Vec<Language>>>,
}

impl RecordingSubscriber {
    /// Build a callback suitable for [`Translator::subscribe`](super::Translator::subscribe).
    #[must_use]
    pub fn callback(&self) -> impl FnMut(Language) + 'static {
        let seen = Rc::clone(&self.seen);
        move |language| seen.borrow_mut().push(language)
    }

    /// Languages received so far.
    #[must_use]
    pub fn seen(&self) -> Vec<Language> {
        self.seen.borrow().clone()
    }
}
