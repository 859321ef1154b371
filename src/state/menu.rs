//! Mobile navigation open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub const ICON_CLOSED: &'static str = "ph-list";
    pub const ICON_OPEN: &'static str = "ph-x";

    /// Flip the panel and return whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Glyph for the toggle button: a list while closed, a cross while open.
    #[must_use]
    pub fn icon(self) -> &'static str {
        if self.open { Self::ICON_OPEN } else { Self::ICON_CLOSED }
    }

    /// The glyph being replaced by [`Self::icon`].
    #[must_use]
    pub fn stale_icon(self) -> &'static str {
        if self.open { Self::ICON_CLOSED } else { Self::ICON_OPEN }
    }
}
