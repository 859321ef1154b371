//! Theme toggle binder backed by `localStorage`.

use web_sys::{Document, Element, Storage, Window};

use crate::config::PageConfig;
use crate::dom::{listen, media_matches};
use crate::error::BindError;
use crate::state::theme::{PreferenceStore, Theme, ThemeController, ThemeIcon};

/// `localStorage` slot. Private browsing or disabled storage reads as empty
/// and drops writes.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::debug!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to persist theme preference");
        }
    }
}

pub fn bind(window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    let root = document.document_element().ok_or(BindError::NoDocument)?;
    let prefers_dark = media_matches(window, &config.prefers_dark_query);
    let mut controller = ThemeController::new(LocalStore::from_window(window), config.storage_key.clone(), prefers_dark);

    let button = document.get_element_by_id(&config.theme_toggle_id);
    let icon = button.as_ref().and_then(|b| b.query_selector("i").ok().flatten());
    let attribute = config.theme_attribute.clone();

    // The initial theme applies even when the page has no toggle button.
    apply(&root, &attribute, icon.as_ref(), controller.current())?;

    let Some(button) = button else {
        log::debug!("no #{} on page", config.theme_toggle_id);
        return Ok(());
    };

    listen(&button, "click", move |_| {
        let theme = controller.toggle();
        if let Err(e) = apply(&root, &attribute, icon.as_ref(), theme) {
            log::warn!("theme toggle: {e}");
        }
    })
}

fn apply(root: &Element, attribute: &str, icon: Option<&Element>, theme: Theme) -> Result<(), BindError> {
    root.set_attribute(attribute, theme.as_str())?;
    if let Some(icon) = icon {
        let list = icon.class_list();
        for token in ThemeIcon::ALL_TOKENS {
            list.remove_1(token)?;
        }
        list.add_1(theme.icon().token())?;
    }
    Ok(())
}
