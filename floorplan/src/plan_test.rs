#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn geom(x: f64, y: f64, w: f64, h: f64) -> RectGeom {
    RectGeom { x, y, width: w, height: h }
}

fn graphics_one_room() -> RoomGraphics {
    let mut g = RoomGraphics::new();
    g.insert("B-101".to_owned(), vec![geom(0.0, 0.0, 100.0, 80.0), geom(200.0, 0.0, 50.0, 50.0)]);
    g
}

fn legal() -> Vec<String> {
    vec!["B-101".to_owned(), "B-102".to_owned()]
}

fn handle_of(store: &PlanStore, room: &str, index: usize) -> RectHandle {
    RectHandle { room: room.to_owned(), rect: store.rects(room)[index].id }
}

// =============================================================
// Load / to_wire
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = PlanStore::new();
    assert!(store.is_empty());
    assert_eq!(store.room_count(), 0);
}

#[test]
fn load_populates_rooms() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    assert_eq!(store.room_count(), 1);
    assert_eq!(store.rects("B-101").len(), 2);
}

#[test]
fn load_assigns_distinct_ids() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    let rects = store.rects("B-101");
    assert_ne!(rects[0].id, rects[1].id);
}

#[test]
fn load_replaces_previous_contents() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    store.load(&RoomGraphics::new());
    assert!(store.is_empty());
}

#[test]
fn to_wire_round_trips_geometry_in_order() {
    let mut store = PlanStore::new();
    let original = graphics_one_room();
    store.load(&original);
    let wire = store.to_wire();
    assert_eq!(wire, original);
}

#[test]
fn rects_of_unknown_room_is_empty() {
    let store = PlanStore::new();
    assert!(store.rects("nope").is_empty());
}

#[test]
fn room_ids_sorted() {
    let mut g = RoomGraphics::new();
    g.insert("C-3".to_owned(), vec![geom(0.0, 0.0, 1.0, 1.0)]);
    g.insert("A-1".to_owned(), vec![geom(0.0, 0.0, 1.0, 1.0)]);
    g.insert("B-2".to_owned(), vec![geom(0.0, 0.0, 1.0, 1.0)]);
    let mut store = PlanStore::new();
    store.load(&g);
    assert_eq!(store.room_ids(), ["A-1", "B-2", "C-3"]);
}

// =============================================================
// add_rect
// =============================================================

#[test]
fn add_rect_creates_legal_room() {
    let mut store = PlanStore::new();
    let handle = store.add_rect("B-102", Point::new(10.0, 20.0), &legal());
    assert!(handle.is_some());
    let rect = store.rects("B-102")[0];
    assert_eq!(rect.x, 10.0);
    assert_eq!(rect.y, 20.0);
    assert_eq!(rect.width, crate::consts::DEFAULT_RECT_SIZE);
    assert_eq!(rect.height, crate::consts::DEFAULT_RECT_SIZE);
}

#[test]
fn add_rect_rejects_unknown_room() {
    let mut store = PlanStore::new();
    assert!(store.add_rect("Z-999", Point::new(0.0, 0.0), &legal()).is_none());
    assert!(store.is_empty());
}

#[test]
fn add_rect_rejects_empty_creation_id() {
    let mut store = PlanStore::new();
    assert!(store.add_rect("", Point::new(0.0, 0.0), &legal()).is_none());
}

#[test]
fn add_rect_appends_to_existing_room() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    // Existing rooms accept appends even without a legal-id match.
    let handle = store.add_rect("B-101", Point::new(5.0, 5.0), &[]);
    assert!(handle.is_some());
    assert_eq!(store.rects("B-101").len(), 3);
}

#[test]
fn add_rect_no_dedup() {
    let mut store = PlanStore::new();
    store.add_rect("B-102", Point::new(1.0, 1.0), &legal());
    store.add_rect("B-102", Point::new(1.0, 1.0), &legal());
    assert_eq!(store.rects("B-102").len(), 2);
}

// =============================================================
// move / set_geom / resize
// =============================================================

#[test]
fn move_rect_updates_position_only() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    let handle = handle_of(&store, "B-101", 0);
    assert!(store.move_rect(&handle, 33.5, -7.25));
    let rect = store.get(&handle).unwrap();
    assert_eq!(rect.x, 33.5);
    assert_eq!(rect.y, -7.25);
    assert_eq!(rect.width, 100.0);
}

#[test]
fn move_rect_missing_returns_false() {
    let mut store = PlanStore::new();
    let handle = RectHandle { room: "B-101".to_owned(), rect: Uuid::new_v4() };
    assert!(!store.move_rect(&handle, 0.0, 0.0));
}

#[test]
fn set_geom_is_verbatim() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    let handle = handle_of(&store, "B-101", 0);
    assert!(store.set_geom(&handle, geom(1.7, 2.3, 0.5, 0.5)));
    let rect = store.get(&handle).unwrap();
    assert_eq!(rect.x, 1.7);
    assert_eq!(rect.width, 0.5);
}

#[test]
fn resize_rect_floors_values() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    let handle = handle_of(&store, "B-101", 0);
    assert!(store.resize_rect(&handle, geom(10.9, 20.1, 55.8, 44.2)));
    let rect = store.get(&handle).unwrap();
    assert_eq!(rect.x, 10.0);
    assert_eq!(rect.y, 20.0);
    assert_eq!(rect.width, 55.0);
    assert_eq!(rect.height, 44.0);
}

#[test]
fn resize_rect_clamps_to_minimum() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    let handle = handle_of(&store, "B-101", 0);
    store.resize_rect(&handle, geom(0.0, 0.0, 0.3, -5.0));
    let rect = store.get(&handle).unwrap();
    assert_eq!(rect.width, crate::consts::MIN_RECT_SIZE);
    assert_eq!(rect.height, crate::consts::MIN_RECT_SIZE);
}

// =============================================================
// delete_rect
// =============================================================

#[test]
fn delete_one_of_several_keeps_others() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    let first = handle_of(&store, "B-101", 0);
    let second = handle_of(&store, "B-101", 1);
    assert!(store.delete_rect(&first));
    assert_eq!(store.rects("B-101").len(), 1);
    // The survivor keeps its identity.
    assert_eq!(store.rects("B-101")[0].id, second.rect);
    assert!(store.get(&second).is_some());
}

#[test]
fn delete_last_rect_removes_room_entirely() {
    let mut store = PlanStore::new();
    let mut g = RoomGraphics::new();
    g.insert("B-101".to_owned(), vec![geom(0.0, 0.0, 10.0, 10.0)]);
    store.load(&g);
    let handle = handle_of(&store, "B-101", 0);
    assert!(store.delete_rect(&handle));
    assert!(store.is_empty());
    assert!(!store.to_wire().contains_key("B-101"));
}

#[test]
fn delete_missing_returns_false() {
    let mut store = PlanStore::new();
    store.load(&graphics_one_room());
    let handle = RectHandle { room: "B-101".to_owned(), rect: Uuid::new_v4() };
    assert!(!store.delete_rect(&handle));
    assert_eq!(store.rects("B-101").len(), 2);
}

// =============================================================
// PlanRect
// =============================================================

#[test]
fn contains_inside_and_edges() {
    let rect = PlanRect { id: Uuid::new_v4(), x: 10.0, y: 10.0, width: 20.0, height: 10.0 };
    assert!(rect.contains(Point::new(15.0, 15.0)));
    assert!(rect.contains(Point::new(10.0, 10.0)));
    assert!(rect.contains(Point::new(30.0, 20.0)));
    assert!(!rect.contains(Point::new(9.9, 15.0)));
    assert!(!rect.contains(Point::new(15.0, 20.1)));
}
