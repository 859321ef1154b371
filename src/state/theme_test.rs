use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_strings_round_trip_through_parse() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_and_empty_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("blue"), None);
    assert_eq!(Theme::parse("Dark"), None);
}

#[test]
fn icon_shows_the_opposite_action() {
    assert_eq!(Theme::Dark.icon(), ThemeIcon::Sun);
    assert_eq!(Theme::Light.icon(), ThemeIcon::Moon);
    assert_eq!(ThemeIcon::Sun.token(), "ph-sun");
    assert_eq!(ThemeIcon::Moon.token(), "ph-moon");
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Theme>("\"light\"").unwrap(), Theme::Light);
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn no_stored_preference_follows_os_signal() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
}

#[test]
fn stored_preference_beats_os_signal() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn invalid_stored_value_falls_back_to_os_signal() {
    assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn controller_reads_store_on_creation() {
    let controller = ThemeController::new(MemoryStore::with_entry("theme", "dark"), "theme", false);
    assert_eq!(controller.current(), Theme::Dark);
}

#[test]
fn controller_does_not_persist_until_toggled() {
    let controller = ThemeController::new(MemoryStore::new(), "theme", true);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.store().get("theme"), None);
}

#[test]
fn toggle_persists_new_theme() {
    let mut controller = ThemeController::new(MemoryStore::new(), "theme", false);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.store().get("theme").as_deref(), Some("dark"));
}

#[test]
fn double_toggle_restores_theme_and_icon() {
    let mut controller = ThemeController::new(MemoryStore::new(), "theme", true);
    let start = controller.current();
    let start_icon = start.icon();
    controller.toggle();
    let end = controller.toggle();
    assert_eq!(end, start);
    assert_eq!(end.icon(), start_icon);
    assert_eq!(controller.store().get("theme").as_deref(), Some(start.as_str()));
}

#[test]
fn controller_uses_configured_key() {
    let mut controller = ThemeController::new(MemoryStore::with_entry("site-theme", "dark"), "site-theme", false);
    assert_eq!(controller.current(), Theme::Dark);
    controller.toggle();
    assert_eq!(controller.store().get("site-theme").as_deref(), Some("light"));
    assert_eq!(controller.store().get("theme"), None);
}
