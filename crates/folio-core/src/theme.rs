//! Light/dark theme state, synced with the preference store.

use crate::prefs::{PreferenceStore, THEME_KEY};
use folio_types::ThemePreference;
use std::cell::Cell;
use tracing::{debug, warn};

pub struct ThemeController<P> {
    store: P,
    current: Cell<ThemePreference>,
}

impl<P: PreferenceStore> ThemeController<P> {
    pub fn new(store: P) -> Self {
        Self {
            store,
            current: Cell::new(ThemePreference::default()),
        }
    }

    /// Read the stored preference. Absent or unrecognised values mean light.
    pub fn load(&self) -> ThemePreference {
        let theme = match self.store.get(THEME_KEY) {
            Some(raw) => ThemePreference::from_storage_value(&raw).unwrap_or_else(|| {
                warn!("unknown stored theme {:?}, using light", raw);
                ThemePreference::Light
            }),
            None => ThemePreference::Light,
        };
        self.current.set(theme);
        theme
    }

    pub fn toggle(&self) -> ThemePreference {
        let next = self.current.get().toggled();
        match next.storage_value() {
            Some(value) => self.store.set(THEME_KEY, value),
            None => self.store.remove(THEME_KEY),
        }
        self.current.set(next);
        debug!("theme toggled to {:?}", next);
        next
    }

    pub fn current(&self) -> ThemePreference {
        self.current.get()
    }
}
