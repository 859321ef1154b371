//! Busy indicator for the contact form's submit button.
//!
//! Purely cosmetic. The form still submits to its external handler.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitIndicator {
    busy: bool,
}

impl SubmitIndicator {
    /// Mark the form as submitting. Returns `true` when the button should be
    /// repainted, which only happens on the first submission.
    pub fn submit(&mut self) -> bool {
        let repaint = !self.busy;
        self.busy = true;
        repaint
    }

    #[must_use]
    pub fn is_busy(self) -> bool {
        self.busy
    }
}
