//! One-shot visibility latches for observed elements.
//!
//! Fade-ins and counters both fire once per element. The observer is
//! detached after the first hit, but a batch of intersection entries can
//! still name the same element twice, so the latch decides.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element and return its slot.
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Record an intersection report. Returns `true` only on the first
    /// intersecting report for `slot`.
    pub fn observe(&mut self, slot: usize, intersecting: bool) -> bool {
        let Some(seen) = self.revealed.get_mut(slot) else {
            return false;
        };
        if !intersecting || *seen {
            return false;
        }
        *seen = true;
        true
    }

    #[must_use]
    pub fn is_revealed(&self, slot: usize) -> bool {
        self.revealed.get(slot).copied().unwrap_or(false)
    }

    /// Number of registered elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|seen| !**seen).count()
    }
}
