//! Light/dark theme preference.
//!
//! The stored preference wins; without one the OS `prefers-color-scheme`
//! signal decides. The toggle icon always shows the action on offer, so dark
//! mode shows a sun and light mode shows a moon.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the root `data-theme` attribute and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `light`/`dark` is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn icon(self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Moon,
            Self::Dark => ThemeIcon::Sun,
        }
    }

    /// Pick the starting theme from a stored value and the OS signal.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Self::parse) {
            return theme;
        }
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Icon glyph on the theme toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub const ALL_TOKENS: [&'static str; 2] = ["ph-sun", "ph-moon"];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Sun => "ph-sun",
            Self::Moon => "ph-moon",
        }
    }
}

/// Key-value slot holding the persisted preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for tests and for browsers with storage disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Current theme plus the store it persists to.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the initial theme. Nothing is written until the first toggle.
    #[must_use]
    pub fn new(store: S, key: impl Into<String>, prefers_dark: bool) -> Self {
        let key = key.into();
        let stored = store.get(&key);
        let current = Theme::resolve(stored.as_deref(), prefers_dark);
        log::debug!("initial theme {} (stored: {stored:?})", current.as_str());
        Self { store, key, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(&self.key, self.current.as_str());
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
