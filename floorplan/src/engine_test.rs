#![allow(clippy::float_cmp)]

use super::*;

use crate::consts::{DEFAULT_RECT_SIZE, ZOOM_STEP};
use crate::plan::RectGeom;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn geom(x: f64, y: f64, w: f64, h: f64) -> RectGeom {
    RectGeom { x, y, width: w, height: h }
}

fn graphics(rooms: &[(&str, Vec<RectGeom>)]) -> RoomGraphics {
    rooms.iter().map(|(room, rects)| ((*room).to_owned(), rects.clone())).collect()
}

/// Engine with an identity camera so screen == world in tests.
fn core(mode: Mode) -> EngineCore {
    let mut core = EngineCore::new(mode);
    core.camera = Camera { x: 0.0, y: 0.0, scale: 1.0 };
    core
}

fn core_with_room(mode: Mode) -> EngineCore {
    let mut core = core(mode);
    core.load_graphics(&graphics(&[("B-101", vec![geom(10.0, 10.0, 100.0, 80.0)])]));
    core
}

fn select_rect(core: &mut EngineCore) -> Selection {
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_up(pt(50.0, 50.0), Button::Primary);
    core.selection().cloned().expect("rect should be selected")
}

fn has_plan_changed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::PlanChanged(_)))
}

fn plan_changed(actions: &[Action]) -> &RoomGraphics {
    actions
        .iter()
        .find_map(|a| match a {
            Action::PlanChanged(g) => Some(g),
            _ => None,
        })
        .expect("expected a PlanChanged action")
}

// =============================================================
// Construction and defaults
// =============================================================

#[test]
fn new_core_has_no_selection() {
    let core = EngineCore::new(Mode::View);
    assert!(core.selection().is_none());
    assert!(core.plan.is_empty());
    assert!(matches!(core.gesture, Gesture::Idle));
}

#[test]
fn new_core_camera_matches_start_view() {
    let core = EngineCore::new(Mode::View);
    assert_eq!(core.camera, Camera::default());
}

#[test]
fn load_graphics_clears_selection() {
    let mut core = core_with_room(Mode::View);
    select_rect(&mut core);
    core.load_graphics(&RoomGraphics::new());
    assert!(core.selection().is_none());
}

// =============================================================
// Panning
// =============================================================

#[test]
fn drag_on_empty_canvas_pans_camera() {
    let mut core = core(Mode::View);
    core.on_pointer_down(pt(300.0, 300.0), Button::Primary);
    assert!(matches!(core.gesture, Gesture::Panning { .. }));
    let actions = core.on_pointer_move(pt(280.0, 310.0));
    assert!(actions.contains(&Action::RenderNeeded));
    assert_eq!(core.camera.x, -20.0);
    assert_eq!(core.camera.y, 10.0);
    core.on_pointer_up(pt(280.0, 310.0), Button::Primary);
    assert!(matches!(core.gesture, Gesture::Idle));
}

#[test]
fn pan_is_clamped_to_image_bounds() {
    let mut core = core(Mode::View);
    core.set_viewport(800.0, 600.0);
    core.set_image(2000.0, 2000.0);
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_move(pt(500.0, 500.0));
    assert_eq!(core.camera.x, 0.0);
    assert_eq!(core.camera.y, 0.0);
}

#[test]
fn click_on_empty_canvas_clears_selection() {
    let mut core = core_with_room(Mode::View);
    select_rect(&mut core);
    let actions = core.on_pointer_down(pt(500.0, 500.0), Button::Primary);
    assert!(actions.contains(&Action::SelectionCleared));
    assert!(core.selection().is_none());
}

#[test]
fn click_on_empty_canvas_without_selection_is_quiet() {
    let mut core = core(Mode::View);
    let actions = core.on_pointer_down(pt(500.0, 500.0), Button::Primary);
    assert!(actions.is_empty());
}

#[test]
fn secondary_button_is_ignored() {
    let mut core = core_with_room(Mode::View);
    let actions = core.on_pointer_down(pt(50.0, 50.0), Button::Secondary);
    assert!(actions.is_empty());
    assert!(core.selection().is_none());
}

// =============================================================
// Wheel zoom
// =============================================================

#[test]
fn wheel_up_zooms_in() {
    let mut core = core(Mode::View);
    let actions = core.on_wheel(pt(100.0, 100.0), WheelDelta { dx: 0.0, dy: -1.0 });
    assert!(actions.contains(&Action::RenderNeeded));
    assert_eq!(core.camera.scale, ZOOM_STEP);
}

#[test]
fn wheel_down_below_floor_is_ignored() {
    let mut core = core(Mode::View);
    core.camera.scale = 0.1;
    let actions = core.on_wheel(pt(100.0, 100.0), WheelDelta { dx: 0.0, dy: 1.0 });
    assert!(actions.is_empty());
    assert_eq!(core.camera.scale, 0.1);
}

// =============================================================
// Selection (view mode)
// =============================================================

#[test]
fn click_on_rect_selects_it() {
    let mut core = core_with_room(Mode::View);
    let actions = core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    let selection = core.selection().unwrap();
    assert_eq!(selection.room, "B-101");
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::RectSelected { room, rect } if room.as_str() == "B-101" && *rect == selection.rect
    )));
}

#[test]
fn view_mode_never_drags_rects() {
    let mut core = core_with_room(Mode::View);
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    assert!(matches!(core.gesture, Gesture::Idle));
    core.on_pointer_move(pt(90.0, 90.0));
    let actions = core.on_pointer_up(pt(90.0, 90.0), Button::Primary);
    assert!(!has_plan_changed(&actions));
    assert_eq!(core.plan.rects("B-101")[0].x, 10.0);
}

// =============================================================
// Dragging (edit mode)
// =============================================================

#[test]
fn edit_drag_moves_rect_and_reports_plan() {
    let mut core = core_with_room(Mode::Edit);
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    assert!(matches!(core.gesture, Gesture::DraggingRect { .. }));
    core.on_pointer_move(pt(70.0, 45.0));
    let actions = core.on_pointer_up(pt(70.0, 45.0), Button::Primary);
    let wire = plan_changed(&actions);
    assert_eq!(wire["B-101"][0].x, 30.0);
    assert_eq!(wire["B-101"][0].y, 5.0);
}

#[test]
fn edit_click_without_motion_selects_only() {
    let mut core = core_with_room(Mode::Edit);
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    let actions = core.on_pointer_up(pt(50.0, 50.0), Button::Primary);
    assert!(!has_plan_changed(&actions));
    assert!(core.selection().is_some());
}

#[test]
fn edit_drag_accumulates_across_moves() {
    let mut core = core_with_room(Mode::Edit);
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(60.0, 50.0));
    core.on_pointer_move(pt(75.0, 55.0));
    let actions = core.on_pointer_up(pt(75.0, 55.0), Button::Primary);
    let wire = plan_changed(&actions);
    assert_eq!(wire["B-101"][0].x, 35.0);
    assert_eq!(wire["B-101"][0].y, 15.0);
}

// =============================================================
// Resizing (edit mode)
// =============================================================

#[test]
fn resize_from_se_handle_grows_rect() {
    let mut core = core_with_room(Mode::Edit);
    let selection = select_rect(&mut core);
    // Rect spans (10,10)-(110,90); the SE handle sits at (110,90).
    core.on_pointer_down(pt(110.0, 90.0), Button::Primary);
    assert!(matches!(core.gesture, Gesture::ResizingRect { .. }));
    core.on_pointer_move(pt(130.5, 100.9));
    let actions = core.on_pointer_up(pt(130.5, 100.9), Button::Primary);
    let wire = plan_changed(&actions);
    // Release floors the live geometry.
    assert_eq!(wire["B-101"][0].width, 120.0);
    assert_eq!(wire["B-101"][0].height, 90.0);
    assert_eq!(core.plan.get(&selection.handle()).unwrap().width, 120.0);
}

#[test]
fn resize_from_nw_handle_moves_origin() {
    let mut core = core_with_room(Mode::Edit);
    select_rect(&mut core);
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    core.on_pointer_move(pt(20.0, 30.0));
    let actions = core.on_pointer_up(pt(20.0, 30.0), Button::Primary);
    let wire = plan_changed(&actions);
    assert_eq!(wire["B-101"][0], geom(20.0, 30.0, 90.0, 60.0));
}

#[test]
fn resize_never_collapses_below_minimum() {
    let mut core = core_with_room(Mode::Edit);
    select_rect(&mut core);
    core.on_pointer_down(pt(110.0, 90.0), Button::Primary);
    // Drag the SE handle far past the NW corner.
    core.on_pointer_move(pt(-400.0, -400.0));
    let actions = core.on_pointer_up(pt(-400.0, -400.0), Button::Primary);
    let wire = plan_changed(&actions);
    assert_eq!(wire["B-101"][0].width, crate::consts::MIN_RECT_SIZE);
    assert_eq!(wire["B-101"][0].height, crate::consts::MIN_RECT_SIZE);
}

#[test]
fn view_mode_has_no_resize_handles() {
    let mut core = core_with_room(Mode::View);
    select_rect(&mut core);
    // Just outside the rect near the SE corner: nothing to grab in view mode.
    let actions = core.on_pointer_down(pt(114.0, 94.0), Button::Primary);
    assert!(actions.contains(&Action::SelectionCleared));
    assert!(matches!(core.gesture, Gesture::Panning { .. }));
}

// =============================================================
// Rectangle creation (double-click)
// =============================================================

#[test]
fn double_click_adds_rect_for_legal_creation_id() {
    let mut core = core(Mode::Edit);
    core.set_legal_room_ids(vec!["B-102".to_owned()]);
    core.set_creation_id("B-102".to_owned());
    let actions = core.on_double_click(pt(40.0, 60.0));
    let wire = plan_changed(&actions);
    assert_eq!(wire["B-102"][0], geom(40.0, 60.0, DEFAULT_RECT_SIZE, DEFAULT_RECT_SIZE));
}

#[test]
fn double_click_ignores_illegal_creation_id() {
    let mut core = core(Mode::Edit);
    core.set_legal_room_ids(vec!["B-102".to_owned()]);
    core.set_creation_id("Z-999".to_owned());
    let actions = core.on_double_click(pt(40.0, 60.0));
    assert!(actions.is_empty());
    assert!(core.plan.is_empty());
}

#[test]
fn double_click_ignores_empty_creation_id() {
    let mut core = core(Mode::Edit);
    core.set_legal_room_ids(vec!["B-102".to_owned()]);
    let actions = core.on_double_click(pt(40.0, 60.0));
    assert!(actions.is_empty());
}

#[test]
fn double_click_noop_in_view_mode() {
    let mut core = core(Mode::View);
    core.set_legal_room_ids(vec!["B-102".to_owned()]);
    core.set_creation_id("B-102".to_owned());
    assert!(core.on_double_click(pt(40.0, 60.0)).is_empty());
}

#[test]
fn double_click_converts_pointer_to_world() {
    let mut core = core(Mode::Edit);
    core.camera = Camera { x: -100.0, y: -50.0, scale: 2.0 };
    core.set_legal_room_ids(vec!["B-102".to_owned()]);
    core.set_creation_id("B-102".to_owned());
    let actions = core.on_double_click(pt(100.0, 50.0));
    let wire = plan_changed(&actions);
    assert_eq!(wire["B-102"][0].x, 100.0);
    assert_eq!(wire["B-102"][0].y, 50.0);
}

// =============================================================
// Deletion
// =============================================================

#[test]
fn delete_key_removes_selected_rect() {
    let mut core = core(Mode::Edit);
    core.load_graphics(&graphics(&[(
        "B-101",
        vec![geom(10.0, 10.0, 100.0, 80.0), geom(200.0, 10.0, 50.0, 50.0)],
    )]));
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_up(pt(50.0, 50.0), Button::Primary);
    let actions = core.on_key_down(&Key("Delete".into()));
    assert!(actions.contains(&Action::SelectionCleared));
    let wire = plan_changed(&actions);
    assert_eq!(wire["B-101"].len(), 1);
    assert_eq!(wire["B-101"][0].x, 200.0);
    assert!(core.selection().is_none());
}

#[test]
fn deleting_only_rect_drops_room_key() {
    let mut core = core_with_room(Mode::Edit);
    select_rect(&mut core);
    let actions = core.on_key_down(&Key("Delete".into()));
    let wire = plan_changed(&actions);
    assert!(!wire.contains_key("B-101"));
}

#[test]
fn delete_key_noop_without_selection() {
    let mut core = core_with_room(Mode::Edit);
    assert!(core.on_key_down(&Key("Delete".into())).is_empty());
}

#[test]
fn delete_key_noop_in_view_mode() {
    let mut core = core_with_room(Mode::View);
    select_rect(&mut core);
    assert!(core.on_key_down(&Key("Delete".into())).is_empty());
    assert_eq!(core.plan.rects("B-101").len(), 1);
}

#[test]
fn other_keys_ignored() {
    let mut core = core_with_room(Mode::Edit);
    select_rect(&mut core);
    assert!(core.on_key_down(&Key("Escape".into())).is_empty());
    assert!(core.selection().is_some());
}

// =============================================================
// Fill derivation
// =============================================================

#[test]
fn fill_for_unknown_room_is_neutral() {
    let core = core(Mode::View);
    assert_eq!(core.fill_for("B-101"), Fill::Neutral);
}

#[test]
fn fill_for_selected_room_is_active() {
    let mut core = core_with_room(Mode::View);
    select_rect(&mut core);
    assert_eq!(core.fill_for("B-101"), Fill::Active);
}

#[test]
fn fill_for_highlighted_room() {
    let mut core = core_with_room(Mode::View);
    core.set_highlighted(["B-101".to_owned()]);
    assert_eq!(core.fill_for("B-101"), Fill::Highlight);
}

#[test]
fn fill_for_access_flags() {
    let mut core = core_with_room(Mode::View);
    let mut access = HashMap::new();
    access.insert("B-101".to_owned(), AccessFlags { has_access: true, expiring: false });
    core.set_access(access);
    assert_eq!(core.fill_for("B-101"), Fill::Granted);
}

#[test]
fn fill_for_expiring_access_warns() {
    let mut core = core_with_room(Mode::View);
    let mut access = HashMap::new();
    access.insert("B-101".to_owned(), AccessFlags { has_access: true, expiring: true });
    core.set_access(access);
    assert_eq!(core.fill_for("B-101"), Fill::Warning);
}

#[test]
fn fill_for_responsible_room() {
    let mut core = core_with_room(Mode::View);
    core.set_responsibilities(["B-101".to_owned()]);
    assert_eq!(core.fill_for("B-101"), Fill::Responsible);
}

#[test]
fn all_responsible_covers_every_room() {
    let mut core = core_with_room(Mode::View);
    core.set_all_responsible(true);
    assert_eq!(core.fill_for("B-101"), Fill::Responsible);
    assert_eq!(core.fill_for("anything"), Fill::Responsible);
}

// =============================================================
// Editor scenario
// =============================================================

#[test]
fn editor_session_end_to_end() {
    let mut core = core(Mode::Edit);
    core.set_viewport(800.0, 600.0);
    core.set_legal_room_ids(vec!["B-101".to_owned(), "B-102".to_owned()]);

    // Create two rectangles for one room.
    core.set_creation_id("B-101".to_owned());
    core.on_double_click(pt(10.0, 10.0));
    core.on_double_click(pt(300.0, 10.0));
    assert_eq!(core.plan.rects("B-101").len(), 2);

    // Select and drag the first one.
    core.on_pointer_down(pt(50.0, 50.0), Button::Primary);
    core.on_pointer_move(pt(60.0, 70.0));
    let actions = core.on_pointer_up(pt(60.0, 70.0), Button::Primary);
    assert_eq!(plan_changed(&actions)["B-101"][0].y, 30.0);

    // Delete it; the second one survives with its identity.
    let survivor = core.plan.rects("B-101")[1].id;
    let actions = core.on_key_down(&Key("Delete".into()));
    let wire = plan_changed(&actions);
    assert_eq!(wire["B-101"].len(), 1);
    assert_eq!(core.plan.rects("B-101")[0].id, survivor);
}
