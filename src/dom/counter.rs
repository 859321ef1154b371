//! Counter binder: derives targets at load, animates on first sight.

use std::time::Duration;

use web_sys::{Document, Element, Window};

use crate::config::PageConfig;
use crate::dom::query_all;
use crate::dom::reveal::watch_once;
use crate::error::BindError;
use crate::state::counter::{CounterAnimation, derive_target, is_percent_context};

pub fn bind(_window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    let counters = query_all(document, &config.counter_selector);
    if counters.is_empty() {
        log::debug!("no {} elements", config.counter_selector);
        return Ok(());
    }

    let mut targets = Vec::with_capacity(counters.len());
    for el in &counters {
        let attribute = el.get_attribute(&config.counter_target_attribute);
        let text = el.text_content().unwrap_or_default();
        let target = derive_target(attribute.as_deref(), &text);
        let target_text = target.to_string();
        if attribute.as_deref() != Some(target_text.as_str()) {
            el.set_attribute(&config.counter_target_attribute, &target_text)?;
        }
        targets.push(target);
    }
    log::debug!("watching {} counters", counters.len());

    let speed = config.counter_speed;
    let tick = Duration::from_millis(u64::from(config.counter_tick_ms));
    watch_once(counters, config.counter_threshold, None, move |el, slot| {
        let target = targets.get(slot).copied().unwrap_or(0);
        animate(el.clone(), target, speed, tick);
    })
}

fn animate(el: Element, target: u64, speed: u32, tick: Duration) {
    let percent = is_percent_context(
        el.parent_element()
            .and_then(|parent| parent.text_content())
            .as_deref(),
    );
    el.set_text_content(Some(CounterAnimation::START_TEXT));

    wasm_bindgen_futures::spawn_local(async move {
        let mut animation = CounterAnimation::new(target, speed, percent);
        while let Some(frame) = animation.tick() {
            el.set_text_content(Some(&frame.text()));
            if frame.is_final() {
                break;
            }
            gloo_timers::future::sleep(tick).await;
        }
    });
}
