use super::*;

fn run(target: u64, speed: u32, percent: bool) -> Vec<Frame> {
    CounterAnimation::new(target, speed, percent).collect()
}

fn final_text(frames: &[Frame]) -> String {
    frames.last().expect("animation yields at least one frame").text()
}

// =============================================================
// Target derivation
// =============================================================

#[test]
fn attribute_target_wins_over_text() {
    assert_eq!(derive_target(Some("250000"), "250k+"), 250_000);
}

#[test]
fn text_digits_used_without_attribute() {
    assert_eq!(derive_target(None, "1,200 clients"), 1200);
    assert_eq!(derive_target(None, "98%"), 98);
}

#[test]
fn suffix_text_loses_its_magnitude() {
    // "250k+" has no attribute, so only the digits survive.
    assert_eq!(derive_target(None, "250k+"), 250);
}

#[test]
fn non_numeric_attribute_falls_back_to_text() {
    assert_eq!(derive_target(Some("lots"), "42+"), 42);
    assert_eq!(derive_target(Some(""), "17"), 17);
}

#[test]
fn malformed_text_degrades_to_zero() {
    assert_eq!(derive_target(None, ""), 0);
    assert_eq!(derive_target(None, "n/a"), 0);
    assert_eq!(derive_target(None, "99999999999999999999999"), 0);
}

// =============================================================
// Context and final formatting
// =============================================================

#[test]
fn percent_context_matches_growth_or_rate() {
    assert!(is_percent_context(Some("42 Growth Rate")));
    assert!(is_percent_context(Some("Retention Rate")));
    assert!(is_percent_context(Some("YoY Growth")));
    assert!(!is_percent_context(Some("Projects shipped")));
    assert!(!is_percent_context(None));
}

#[test]
fn thousands_take_k_suffix_first() {
    assert_eq!(final_label(250_000, false), "250k+");
    assert_eq!(final_label(250_000, true), "250k+");
    assert_eq!(final_label(1000, false), "1k+");
}

#[test]
fn thousands_round_to_nearest() {
    assert_eq!(final_label(1499, false), "1k+");
    assert_eq!(final_label(1500, false), "2k+");
    assert_eq!(final_label(2500, false), "3k+");
}

#[test]
fn percent_and_plus_below_a_thousand() {
    assert_eq!(final_label(42, true), "42%");
    assert_eq!(final_label(7, false), "7+");
    assert_eq!(final_label(999, false), "999+");
}

// =============================================================
// Animation
// =============================================================

#[test]
fn zero_target_finishes_without_counting() {
    let frames = run(0, 200, false);
    assert_eq!(frames, vec![Frame::Final("0+".to_owned())]);
}

#[test]
fn large_target_ends_in_k_label() {
    let frames = run(250_000, 200, false);
    assert_eq!(final_text(&frames), "250k+");
    // 200 counting ticks plus the settling tick.
    assert_eq!(frames.len(), 201);
}

#[test]
fn growth_rate_counter_ends_in_percent() {
    let frames = run(42, 200, is_percent_context(Some("Growth Rate")));
    assert_eq!(final_text(&frames), "42%");
}

#[test]
fn small_target_steps_by_one() {
    let frames = run(7, 200, false);
    let values: Vec<u64> = frames
        .iter()
        .filter_map(|f| match f {
            Frame::Value(v) => Some(*v),
            Frame::Final(_) => None,
        })
        .collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(final_text(&frames), "7+");
}

#[test]
fn intermediate_values_are_monotonic_and_bounded() {
    for target in [1, 3, 199, 200, 201, 1234, 987_654] {
        let mut last = 0;
        for frame in CounterAnimation::new(target, 200, false) {
            if let Frame::Value(v) = frame {
                assert!(v >= last, "target {target}: {v} < {last}");
                assert!(v <= target, "target {target}: {v} > {target}");
                last = v;
            }
        }
        assert_eq!(last, target);
    }
}

#[test]
fn only_the_last_frame_is_final() {
    let frames = run(500, 200, false);
    let finals = frames.iter().filter(|f| f.is_final()).count();
    assert_eq!(finals, 1);
    assert!(frames.last().is_some_and(Frame::is_final));
}

#[test]
fn impressions_counter_shows_bare_numbers_mid_animation() {
    // An "Impressions" container gets no special treatment while counting.
    let container = "Impressions";
    let frames = run(800, 200, is_percent_context(Some(container)));
    for frame in &frames[..frames.len() - 1] {
        let text = frame.text();
        assert!(text.chars().all(|c| c.is_ascii_digit()), "unexpected {text:?}");
    }
    assert_eq!(final_text(&frames), "800+");
}

#[test]
fn higher_speed_means_more_ticks() {
    let fast = run(1000, 50, false).len();
    let slow = run(1000, 400, false).len();
    assert!(slow > fast);
}

#[test]
fn zero_speed_is_treated_as_one() {
    let frames = run(9, 0, false);
    assert_eq!(frames, vec![Frame::Value(9), Frame::Final("9+".to_owned())]);
}

#[test]
fn huge_target_terminates() {
    let animation = CounterAnimation::new(u64::MAX, 200, false);
    let count = animation.take(1000).count();
    assert!(count < 1000);
}

#[test]
fn exhausted_animation_stays_exhausted() {
    let mut animation = CounterAnimation::new(2, 200, false);
    while animation.tick().is_some() {}
    assert!(animation.is_finished());
    assert_eq!(animation.current(), animation.target());
    assert_eq!(animation.tick(), None);
}
