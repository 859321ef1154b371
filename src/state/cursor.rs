//! Cursor halo position and hover flag.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HaloState {
    pub x: i32,
    pub y: i32,
    pub hovered: bool,
}

impl HaloState {
    /// Track the pointer and return the inline `(left, top)` values.
    pub fn move_to(&mut self, x: i32, y: i32) -> (String, String) {
        self.x = x;
        self.y = y;
        (format!("{x}px"), format!("{y}px"))
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    // Plain flag, not a depth count: leaving any target clears it.
    pub fn leave(&mut self) {
        self.hovered = false;
    }
}
