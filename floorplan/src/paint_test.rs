use super::*;

fn flags() -> RectFlags {
    RectFlags::default()
}

// =============================================================
// Priority order
// =============================================================

#[test]
fn neutral_when_nothing_set() {
    assert_eq!(Fill::derive(flags()), Fill::Neutral);
}

#[test]
fn selected_room_beats_everything() {
    let f = RectFlags {
        selected_room: true,
        highlighted: true,
        expiring: true,
        has_access: true,
        responsible: true,
    };
    assert_eq!(Fill::derive(f), Fill::Active);
}

#[test]
fn highlight_beats_expiring_and_below() {
    let f = RectFlags { highlighted: true, expiring: true, has_access: true, ..flags() };
    assert_eq!(Fill::derive(f), Fill::Highlight);
}

#[test]
fn expiring_beats_granted() {
    let f = RectFlags { expiring: true, has_access: true, ..flags() };
    assert_eq!(Fill::derive(f), Fill::Warning);
}

#[test]
fn granted_beats_responsible() {
    let f = RectFlags { has_access: true, responsible: true, ..flags() };
    assert_eq!(Fill::derive(f), Fill::Granted);
}

#[test]
fn responsible_alone() {
    let f = RectFlags { responsible: true, ..flags() };
    assert_eq!(Fill::derive(f), Fill::Responsible);
}

// =============================================================
// Colors
// =============================================================

#[test]
fn css_colors_match_access_levels() {
    assert_eq!(Fill::Active.css(), "blue");
    assert_eq!(Fill::Highlight.css(), "lightblue");
    assert_eq!(Fill::Warning.css(), "yellow");
    assert_eq!(Fill::Granted.css(), "green");
    assert_eq!(Fill::Responsible.css(), "lightgreen");
    assert_eq!(Fill::Neutral.css(), "grey");
}

#[test]
fn edit_fill_distinguishes_selected_room() {
    assert_eq!(edit_fill(true), "red");
    assert_eq!(edit_fill(false), "blue");
}
