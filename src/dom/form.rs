//! Contact form busy indicator binder.
//!
//! The submit event is never prevented; the external form handler still
//! receives the post.

use std::cell::Cell;

use web_sys::{Document, Element, Window};

use crate::config::PageConfig;
use crate::dom::{as_html, listen, query};
use crate::error::BindError;
use crate::state::form::SubmitIndicator;

pub fn bind(_window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    let Some(form) = query(document, &config.form_selector) else {
        log::debug!("no {} on page", config.form_selector);
        return Ok(());
    };

    let indicator = Cell::new(SubmitIndicator::default());
    let (markup, opacity) = (config.busy_markup.clone(), config.busy_opacity.clone());
    let target = form.clone();
    listen(&target, "submit", move |_| {
        // Looked up per submit in case the button was re-rendered.
        let Some(button) = form.query_selector("button").ok().flatten() else {
            log::debug!("contact form has no button");
            return;
        };
        let mut state = indicator.get();
        if !state.submit() {
            return;
        }
        indicator.set(state);
        if let Err(e) = show_busy(&button, &markup, &opacity) {
            log::warn!("form indicator: {e}");
        }
    })
}

fn show_busy(button: &Element, markup: &str, opacity: &str) -> Result<(), BindError> {
    button.set_inner_html(markup);
    if let Some(button) = as_html(button) {
        button.style().set_property("opacity", opacity)?;
    }
    Ok(())
}
