//! Cursor halo binder. Fine pointers only; touch devices skip it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::config::PageConfig;
use crate::dom::{as_html, listen, media_matches, query, query_all};
use crate::error::BindError;
use crate::state::cursor::HaloState;

pub fn bind(window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    let Some(halo) = query(document, &config.halo_selector).as_ref().and_then(as_html) else {
        log::debug!("no {} on page", config.halo_selector);
        return Ok(());
    };
    if !media_matches(window, &config.fine_pointer_query) {
        log::debug!("coarse pointer; cursor halo disabled");
        return Ok(());
    }

    let state = Rc::new(RefCell::new(HaloState::default()));

    let on_move = {
        let (state, halo) = (Rc::clone(&state), halo.clone());
        move |event: web_sys::Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (left, top) = state.borrow_mut().move_to(event.client_x(), event.client_y());
            if let Err(e) = place(&halo, &left, &top) {
                log::warn!("cursor halo: {e}");
            }
        }
    };
    listen(document, "mousemove", on_move)?;

    let hovered = config.halo_hovered_class.clone();
    for target in query_all(document, &config.hover_targets_selector) {
        let (enter_state, enter_halo, class) = (Rc::clone(&state), halo.clone(), hovered.clone());
        listen(&target, "mouseenter", move |_| {
            enter_state.borrow_mut().enter();
            let _ = enter_halo.class_list().add_1(&class);
        })?;

        let (leave_state, leave_halo, class) = (Rc::clone(&state), halo.clone(), hovered.clone());
        listen(&target, "mouseleave", move |_| {
            leave_state.borrow_mut().leave();
            let _ = leave_halo.class_list().remove_1(&class);
        })?;
    }
    Ok(())
}

fn place(halo: &HtmlElement, left: &str, top: &str) -> Result<(), BindError> {
    let style = halo.style();
    style.set_property("left", left)?;
    style.set_property("top", top)?;
    Ok(())
}
