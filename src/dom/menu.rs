//! Mobile navigation toggle binder.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::PageConfig;
use crate::dom::{listen, query, query_all_within, swap_class};
use crate::error::BindError;
use crate::state::menu::MenuState;

struct Menu {
    state: MenuState,
    panel: Element,
    icon: Option<Element>,
    open_class: String,
}

impl Menu {
    fn paint(&self) -> Result<(), BindError> {
        self.panel
            .class_list()
            .toggle_with_force(&self.open_class, self.state.open)?;
        if let Some(icon) = &self.icon {
            swap_class(icon, self.state.stale_icon(), self.state.icon())?;
        }
        Ok(())
    }
}

pub fn bind(_window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    let (Some(toggle), Some(panel)) = (
        query(document, &config.menu_toggle_selector),
        query(document, &config.menu_panel_selector),
    ) else {
        log::debug!("menu toggle or panel missing");
        return Ok(());
    };

    let state = MenuState {
        open: panel.class_list().contains(&config.menu_open_class),
    };
    let links = query_all_within(&panel, "a");
    let menu = Rc::new(RefCell::new(Menu {
        state,
        panel,
        icon: toggle.query_selector("i").ok().flatten(),
        open_class: config.menu_open_class.clone(),
    }));

    let on_toggle = Rc::clone(&menu);
    listen(&toggle, "click", move |_| {
        let mut menu = on_toggle.borrow_mut();
        menu.state.toggle();
        if let Err(e) = menu.paint() {
            log::warn!("menu toggle: {e}");
        }
    })?;

    for link in links {
        let on_link = Rc::clone(&menu);
        listen(&link, "click", move |_| {
            let mut menu = on_link.borrow_mut();
            menu.state.close();
            if let Err(e) = menu.paint() {
                log::warn!("menu close: {e}");
            }
        })?;
    }
    Ok(())
}
