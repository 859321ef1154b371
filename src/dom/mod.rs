//! Browser binders, one per behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each binder looks up its markup, returns quietly when the markup is
//! absent, and otherwise registers event listeners that drive a `state`
//! type. Listeners live for the page's lifetime, so their closures are
//! leaked with `Closure::forget`.

pub mod counter;
pub mod cursor;
pub mod form;
pub mod menu;
pub mod progress;
pub mod reveal;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::config::PageConfig;
use crate::error::BindError;

type Binder = fn(&Window, &Document, &PageConfig) -> Result<(), BindError>;

const BINDERS: [(&str, Binder); 7] = [
    ("theme", theme::bind),
    ("menu", menu::bind),
    ("progress", progress::bind),
    ("counter", counter::bind),
    ("fade-in", reveal::bind),
    ("cursor", cursor::bind),
    ("form", form::bind),
];

/// Wire every behavior once the document has been parsed.
pub fn boot() -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    if document.ready_state() == "loading" {
        let target: &EventTarget = &document;
        let (w, d) = (window.clone(), document.clone());
        listen(target, "DOMContentLoaded", move |_| bind_all(&w, &d))?;
    } else {
        bind_all(&window, &document);
    }
    Ok(())
}

fn bind_all(window: &Window, document: &Document) {
    let config = PageConfig::from_document(document);
    log::set_max_level(config.log_level().to_level_filter());

    for (name, bind) in BINDERS {
        match bind(window, document, &config) {
            Ok(()) => log::debug!("{name} bound"),
            Err(e) => log::warn!("{name} not bound: {e}"),
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Register `handler` for `event` on `target` for the page's lifetime.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub(crate) fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn as_html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

/// Replace icon token `from` with `to` on `icon`.
pub(crate) fn swap_class(icon: &Element, from: &str, to: &str) -> Result<(), BindError> {
    let list = icon.class_list();
    list.remove_1(from)?;
    list.add_1(to)?;
    Ok(())
}

pub(crate) fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}
