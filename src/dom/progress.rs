//! Scroll progress bar binder.

use web_sys::{Document, HtmlElement, Window};

use crate::config::PageConfig;
use crate::dom::{as_html, listen};
use crate::error::BindError;
use crate::state::progress::{scroll_percent, width_style};

pub fn bind(window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    let Some(bar) = document
        .get_element_by_id(&config.progress_bar_id)
        .as_ref()
        .and_then(as_html)
    else {
        log::debug!("no #{} on page", config.progress_bar_id);
        return Ok(());
    };

    let document = document.clone();
    paint(&document, &bar)?;
    listen(window, "scroll", move |_| {
        if let Err(e) = paint(&document, &bar) {
            log::warn!("progress bar: {e}");
        }
    })
}

fn paint(document: &Document, bar: &HtmlElement) -> Result<(), BindError> {
    let root = document.document_element().ok_or(BindError::NoDocument)?;
    let mut top = root.scroll_top();
    // Quirks-mode pages scroll the body instead of the root.
    if top == 0 {
        if let Some(body) = document.body() {
            top = body.scroll_top();
        }
    }
    let percent = scroll_percent(
        f64::from(top),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    bar.style().set_property("width", &width_style(percent))?;
    Ok(())
}
