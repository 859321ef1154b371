//! Per-component UI state.
//!
//! DESIGN
//! ======
//! Each behavior keeps its decisions in a small plain type here so the logic
//! tests natively. The `dom` binders only translate browser events into calls
//! on these types and write the results back to the page.

pub mod counter;
pub mod cursor;
pub mod form;
pub mod menu;
pub mod progress;
pub mod reveal;
pub mod theme;
