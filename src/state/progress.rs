//! Scroll progress percentage.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Share of the scrollable range already scrolled, in `[0, 100]`.
///
/// Pages shorter than the viewport have no range and report 0.
#[must_use]
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Inline `width` value for the progress bar.
#[must_use]
pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}
