//! # folio
//!
//! WASM enhancements for a static portfolio page: theme switching, a mobile
//! navigation toggle, a scroll progress bar, animated stat counters,
//! fade-in reveals, a cursor halo, and a contact-form busy indicator.
//!
//! The page loads the compiled module and everything wires itself on start.
//! Every behavior is optional; one whose markup is missing stays inert.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Selectors, class tokens, and timing constants |
//! | [`error`] | Wiring errors, logged and never surfaced |
//! | [`state`] | Browser-free decision logic for each behavior |
//! | `dom` | Browser binders (`hydrate` feature only) |

pub mod config;
pub mod error;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod dom;

/// Module entry point, run by the browser on instantiation.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Max level is narrowed once the page config is read.
    let _ = console_log::init_with_level(log::Level::Trace);

    if let Err(e) = dom::boot() {
        log::error!("folio failed to start: {e}");
    }
}
