//! One-shot intersection watching, and the fade-in binder built on it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::PageConfig;
use crate::dom::query_all;
use crate::error::BindError;
use crate::state::reveal::RevealTracker;

/// Observe `elements` and call `on_reveal(element, index)` the first time
/// each one intersects. Each element is unobserved as soon as it fires.
pub(crate) fn watch_once<F>(
    elements: Vec<Element>,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_reveal: F,
) -> Result<(), BindError>
where
    F: FnMut(&Element, usize) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let mut tracker = RevealTracker::new();
    for _ in &elements {
        tracker.register();
    }
    let tracker = Rc::new(RefCell::new(tracker));
    let watched = Rc::new(elements);

    let on_entries = {
        let watched = Rc::clone(&watched);
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(slot) = watched.iter().position(|el| *el == target) else {
                        continue;
                    };
                    if !tracker.borrow_mut().observe(slot, entry.is_intersecting()) {
                        continue;
                    }
                    observer.unobserve(&target);
                    on_reveal(&target, slot);
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
    for el in watched.iter() {
        observer.observe(el);
    }
    on_entries.forget();
    Ok(())
}

pub fn bind(_window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    let faders = query_all(document, &config.fade_selector);
    if faders.is_empty() {
        log::debug!("no {} elements", config.fade_selector);
        return Ok(());
    }
    log::debug!("watching {} fade-in elements", faders.len());

    let visible = config.fade_visible_class.clone();
    watch_once(faders, config.fade_threshold, Some(&config.fade_root_margin), move |el, _| {
        if el.class_list().add_1(&visible).is_err() {
            log::warn!("failed to reveal fade-in element");
        }
    })
}
