//! Page configuration: selectors, class tokens, and timing constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every string the binders look up in the markup lives here so a page can
//! rename its hooks without rebuilding. Defaults match the stock portfolio
//! markup. A page may override any subset of fields with a JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "counter_speed": 100, "storage_key": "site-theme" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::BindError;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,

    // ── Theme ───────────────────────────────────────────────────
    pub storage_key: String,
    pub theme_attribute: String,
    pub theme_toggle_id: String,
    pub prefers_dark_query: String,

    // ── Navigation ──────────────────────────────────────────────
    pub menu_toggle_selector: String,
    pub menu_panel_selector: String,
    pub menu_open_class: String,

    // ── Progress ────────────────────────────────────────────────
    pub progress_bar_id: String,

    // ── Counters ────────────────────────────────────────────────
    pub counter_selector: String,
    pub counter_target_attribute: String,
    pub counter_threshold: f64,
    /// Divisor applied to the target to get the per-tick increment.
    pub counter_speed: u32,
    pub counter_tick_ms: u32,

    // ── Fade-in ─────────────────────────────────────────────────
    pub fade_selector: String,
    pub fade_visible_class: String,
    pub fade_threshold: f64,
    pub fade_root_margin: String,

    // ── Cursor halo ─────────────────────────────────────────────
    pub halo_selector: String,
    pub halo_hovered_class: String,
    pub fine_pointer_query: String,
    pub hover_targets_selector: String,

    // ── Contact form ────────────────────────────────────────────
    pub form_selector: String,
    pub busy_markup: String,
    pub busy_opacity: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            storage_key: "theme".to_owned(),
            theme_attribute: "data-theme".to_owned(),
            theme_toggle_id: "themeToggle".to_owned(),
            prefers_dark_query: "(prefers-color-scheme: dark)".to_owned(),
            menu_toggle_selector: ".menu-toggle".to_owned(),
            menu_panel_selector: ".nav-links".to_owned(),
            menu_open_class: "is-open".to_owned(),
            progress_bar_id: "progressBar".to_owned(),
            counter_selector: ".counter".to_owned(),
            counter_target_attribute: "data-target".to_owned(),
            counter_threshold: 0.5,
            counter_speed: 200,
            counter_tick_ms: 20,
            fade_selector: ".fade-in".to_owned(),
            fade_visible_class: "visible".to_owned(),
            fade_threshold: 0.1,
            fade_root_margin: "0px 0px -50px 0px".to_owned(),
            halo_selector: ".cursor-halo".to_owned(),
            halo_hovered_class: "hovered".to_owned(),
            fine_pointer_query: "(pointer: fine)".to_owned(),
            hover_targets_selector: "a, button, input, textarea, .project-card, .exp-card".to_owned(),
            form_selector: ".contact-form".to_owned(),
            busy_markup: "<i class='ph ph-spinner ph-spin'></i> Sending...".to_owned(),
            busy_opacity: "0.7".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse an override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, BindError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    /// Level filter for the console logger; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Clamp values a hand-written override could break.
    fn normalize(&mut self) {
        if self.counter_speed == 0 {
            log::warn!("counter_speed must be positive, using default");
            self.counter_speed = Self::default().counter_speed;
        }
        self.counter_threshold = self.counter_threshold.clamp(0.0, 1.0);
        self.fade_threshold = self.fade_threshold.clamp(0.0, 1.0);
    }

    /// Load the override block from the current document, if any.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}
