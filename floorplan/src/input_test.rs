use super::*;

use uuid::Uuid;

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_view() {
    assert_eq!(Mode::default(), Mode::View);
}

#[test]
fn mode_variants_distinct() {
    assert_ne!(Mode::View, Mode::Edit);
}

// =============================================================
// Button / Key / WheelDelta
// =============================================================

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}

#[test]
fn key_stores_browser_name() {
    let k = Key("Delete".into());
    assert_eq!(k.0, "Delete");
    assert_eq!(k, Key("Delete".into()));
}

#[test]
fn wheel_delta_values() {
    let w = WheelDelta { dx: 1.5, dy: -3.0 };
    assert_eq!(w.dx, 1.5);
    assert_eq!(w.dy, -3.0);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selection_handle_addresses_same_rect() {
    let rect = Uuid::new_v4();
    let sel = Selection { room: "B-101".to_owned(), rect };
    let handle = sel.handle();
    assert_eq!(handle.room, "B-101");
    assert_eq!(handle.rect, rect);
}

// =============================================================
// Gesture
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert!(matches!(Gesture::default(), Gesture::Idle));
}

#[test]
fn gesture_take_resets_to_idle() {
    let mut g = Gesture::Panning { last_screen: Point::new(1.0, 2.0) };
    let taken = std::mem::take(&mut g);
    assert!(matches!(taken, Gesture::Panning { .. }));
    assert!(matches!(g, Gesture::Idle));
}
