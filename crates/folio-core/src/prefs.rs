//! Preference persistence.
//!
//! A string key-value store with silent failure: a backend that cannot read
//! returns `None`, one that cannot write drops the write.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

pub const THEME_KEY: &str = "theme";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Rc<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// `primary` when the backend is available, otherwise a fresh in-memory store
/// that lasts for the page session only.
pub fn or_in_memory<P: PreferenceStore + 'static>(primary: Option<P>) -> Box<dyn PreferenceStore> {
    match primary {
        Some(store) => Box::new(store),
        None => {
            debug!("no persistent preference storage, keeping preferences in memory");
            Box::new(InMemoryPreferenceStore::default())
        }
    }
}

/// Non-persistent store: the fallback when the browser has no storage.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
