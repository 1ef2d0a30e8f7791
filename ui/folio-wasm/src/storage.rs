//! `localStorage` access. Every failure degrades to "not stored".

use folio_core::PreferenceStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn local_get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

pub fn local_set(key: &str, value: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(key, value);
    }
}

pub fn local_remove(key: &str) {
    if let Some(s) = storage() {
        let _ = s.remove_item(key);
    }
}

/// Preference store backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    /// `None` when the browser exposes no usable `localStorage`.
    pub fn available() -> Option<Self> {
        storage().map(|_| Self)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        local_get(key)
    }

    fn set(&self, key: &str, value: &str) {
        local_set(key, value)
    }

    fn remove(&self, key: &str) {
        local_remove(key)
    }
}
