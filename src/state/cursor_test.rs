use super::*;

#[test]
fn move_to_formats_pixel_offsets() {
    let mut halo = HaloState::default();
    let (left, top) = halo.move_to(120, 48);
    assert_eq!(left, "120px");
    assert_eq!(top, "48px");
    assert_eq!((halo.x, halo.y), (120, 48));
}

#[test]
fn negative_offsets_pass_through() {
    let mut halo = HaloState::default();
    assert_eq!(halo.move_to(-3, 0), ("-3px".to_owned(), "0px".to_owned()));
}

#[test]
fn enter_and_leave_toggle_hovered() {
    let mut halo = HaloState::default();
    halo.enter();
    assert!(halo.hovered);
    halo.leave();
    assert!(!halo.hovered);
}

#[test]
fn nested_targets_clear_on_first_leave() {
    let mut halo = HaloState::default();
    halo.enter();
    halo.enter();
    halo.leave();
    assert!(!halo.hovered);
}
