//! Animated numeric counters.
//!
//! A counter counts up from 0 to its target in linear steps of
//! `target / speed`, one step per tick, then settles on a formatted label:
//!
//! | Target / context                      | Final label      |
//! |---------------------------------------|------------------|
//! | `target >= 1000`                      | `250k+`          |
//! | container mentions `Growth` or `Rate` | `42%`            |
//! | anything else                         | `7+`             |
//!
//! Intermediate ticks always show the bare number. The animation length
//! depends only on `speed`, not on the target's magnitude.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Container labels that switch the final suffix to `%`.
const PERCENT_LABELS: [&str; 2] = ["Growth", "Rate"];

/// Parse every ASCII digit in `text` as one integer, ignoring everything
/// else. Empty or overflowing input yields 0.
#[must_use]
pub fn digits_only(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Resolve a counter's goal from its target attribute or its initial text.
///
/// A usable attribute wins. Otherwise the digits of the displayed text are
/// taken, so `"1,200 clients"` becomes 1200.
#[must_use]
pub fn derive_target(attribute: Option<&str>, text: &str) -> u64 {
    if let Some(raw) = attribute {
        match raw.trim().parse::<u64>() {
            Ok(target) => return target,
            Err(_) if !raw.trim().is_empty() => {
                log::debug!("ignoring non-numeric counter target {raw:?}");
            }
            Err(_) => {}
        }
    }
    digits_only(text)
}

/// Whether the counter's container reads as a percentage stat.
///
/// A missing container degrades to the generic `+` suffix.
#[must_use]
pub fn is_percent_context(container_text: Option<&str>) -> bool {
    container_text.is_some_and(|text| PERCENT_LABELS.iter().any(|label| text.contains(label)))
}

/// Settled text for a counter that reached `target`.
#[must_use]
pub fn final_label(target: u64, percent_context: bool) -> String {
    if target >= 1000 {
        // Nearest thousand, halves rounded up.
        let thousands = target / 1000 + u64::from(target % 1000 >= 500);
        format!("{thousands}k+")
    } else if percent_context {
        format!("{target}%")
    } else {
        format!("{target}+")
    }
}

/// Text written by one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Bare intermediate value; another tick follows.
    Value(u64),
    /// Settled label; the animation is over.
    Final(String),
}

impl Frame {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Value(v) => v.to_string(),
            Self::Final(label) => label.clone(),
        }
    }

    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final(_))
    }
}

/// Running animation for one counter element.
///
/// Iterating yields one [`Frame`] per tick and ends after the final label.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    current: u64,
    increment: f64,
    percent_context: bool,
    finished: bool,
}

impl CounterAnimation {
    /// Text shown the moment the counter is triggered.
    pub const START_TEXT: &'static str = "0";

    /// `speed` is the number of ticks a counter with target >= speed takes to
    /// finish. Zero is treated as one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: u64, speed: u32, percent_context: bool) -> Self {
        Self {
            target,
            current: 0,
            increment: target as f64 / f64::from(speed.max(1)),
            percent_context,
            finished: false,
        }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn tick(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }
        if self.current >= self.target {
            self.finished = true;
            return Some(Frame::Final(final_label(self.target, self.percent_context)));
        }
        let stepped = (self.current as f64 + self.increment).ceil() as u64;
        // Float rounding on huge targets must never stall the loop.
        let next = stepped.max(self.current + 1).min(self.target);
        self.current = next;
        Some(Frame::Value(next))
    }
}

impl Iterator for CounterAnimation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.tick()
    }
}
