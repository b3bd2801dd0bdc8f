//! Plan model: rooms, their rectangles, and the in-memory store.
//!
//! On the wire a plan is a map from room id to an ordered list of bare
//! rectangles ([`RoomGraphics`]); inside the engine each rectangle carries a
//! generated stable [`RectId`] so selections and edits survive deletions
//! without index renumbering. Ids never leave this crate: [`PlanStore::to_wire`]
//! strips them again, preserving list order.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{DEFAULT_RECT_SIZE, MIN_RECT_SIZE};

/// Identifier of a room, as issued by the server (e.g. `"B-214"`).
pub type RoomId = String;

/// Stable identifier for one rectangle, generated on load/creation.
pub type RectId = Uuid;

/// Addresses one rectangle of one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectHandle {
    pub room: RoomId,
    pub rect: RectId,
}

/// A bare axis-aligned rectangle as stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectGeom {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Wire format of the map graphics blob: room id -> ordered rectangles.
pub type RoomGraphics = HashMap<RoomId, Vec<RectGeom>>;

/// A rectangle with its stable engine-local id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanRect {
    pub id: RectId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlanRect {
    fn from_geom(geom: RectGeom) -> Self {
        Self { id: Uuid::new_v4(), x: geom.x, y: geom.y, width: geom.width, height: geom.height }
    }

    /// The bare geometry, as serialized back to the server.
    #[must_use]
    pub fn geom(&self) -> RectGeom {
        RectGeom { x: self.x, y: self.y, width: self.width, height: self.height }
    }

    /// Whether a world-space point falls inside this rectangle.
    #[must_use]
    pub fn contains(&self, world: Point) -> bool {
        world.x >= self.x
            && world.x <= self.x + self.width
            && world.y >= self.y
            && world.y <= self.y + self.height
    }
}

/// In-memory store of room rectangles.
#[derive(Debug, Default)]
pub struct PlanStore {
    rooms: HashMap<RoomId, Vec<PlanRect>>,
}

impl PlanStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rooms with a wire snapshot, assigning fresh rect ids.
    pub fn load(&mut self, graphics: &RoomGraphics) {
        self.rooms.clear();
        for (room, rects) in graphics {
            self.rooms
                .insert(room.clone(), rects.iter().copied().map(PlanRect::from_geom).collect());
        }
    }

    /// Serialize back to the wire format, preserving per-room order.
    #[must_use]
    pub fn to_wire(&self) -> RoomGraphics {
        self.rooms
            .iter()
            .map(|(room, rects)| (room.clone(), rects.iter().map(PlanRect::geom).collect()))
            .collect()
    }

    /// Room ids in sorted order; also the draw order.
    #[must_use]
    pub fn room_ids(&self) -> Vec<&RoomId> {
        let mut ids: Vec<&RoomId> = self.rooms.keys().collect();
        ids.sort();
        ids
    }

    /// Rectangles of one room, in wire order.
    #[must_use]
    pub fn rects(&self, room: &str) -> &[PlanRect] {
        self.rooms.get(room).map_or(&[], Vec::as_slice)
    }

    /// Look up one rectangle by handle.
    #[must_use]
    pub fn get(&self, handle: &RectHandle) -> Option<&PlanRect> {
        self.rooms.get(&handle.room)?.iter().find(|r| r.id == handle.rect)
    }

    fn get_mut(&mut self, handle: &RectHandle) -> Option<&mut PlanRect> {
        self.rooms.get_mut(&handle.room)?.iter_mut().find(|r| r.id == handle.rect)
    }

    /// Number of rooms with at least one rectangle.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the store contains no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Append a default-sized rectangle for `room` at `at` (world space).
    ///
    /// A room entry is created only when `room` is non-empty, not already
    /// present, and listed in `legal_ids`; an existing entry always accepts
    /// the append. No dedup is performed. Returns the handle of the new
    /// rectangle, or `None` if the room was not eligible.
    pub fn add_rect(&mut self, room: &str, at: Point, legal_ids: &[String]) -> Option<RectHandle> {
        if !self.rooms.contains_key(room) {
            if room.is_empty() || !legal_ids.iter().any(|id| id == room) {
                return None;
            }
            self.rooms.insert(room.to_owned(), Vec::new());
        }

        let rect = PlanRect {
            id: Uuid::new_v4(),
            x: at.x,
            y: at.y,
            width: DEFAULT_RECT_SIZE,
            height: DEFAULT_RECT_SIZE,
        };
        let handle = RectHandle { room: room.to_owned(), rect: rect.id };
        if let Some(rects) = self.rooms.get_mut(room) {
            rects.push(rect);
        }
        Some(handle)
    }

    /// Move a rectangle to a new position. Returns false if it doesn't exist.
    pub fn move_rect(&mut self, handle: &RectHandle, x: f64, y: f64) -> bool {
        let Some(rect) = self.get_mut(handle) else {
            return false;
        };
        rect.x = x;
        rect.y = y;
        true
    }

    /// Overwrite a rectangle's geometry verbatim (live gesture updates).
    /// Returns false if the rectangle doesn't exist.
    pub fn set_geom(&mut self, handle: &RectHandle, geom: RectGeom) -> bool {
        let Some(rect) = self.get_mut(handle) else {
            return false;
        };
        rect.x = geom.x;
        rect.y = geom.y;
        rect.width = geom.width;
        rect.height = geom.height;
        true
    }

    /// Rewrite a rectangle's geometry after a resize.
    ///
    /// Position and size are floored to whole units; width and height are
    /// clamped to [`MIN_RECT_SIZE`]. Returns false if the rectangle doesn't
    /// exist.
    pub fn resize_rect(&mut self, handle: &RectHandle, geom: RectGeom) -> bool {
        let Some(rect) = self.get_mut(handle) else {
            return false;
        };
        rect.x = geom.x.floor();
        rect.y = geom.y.floor();
        rect.width = geom.width.max(MIN_RECT_SIZE).floor();
        rect.height = geom.height.max(MIN_RECT_SIZE).floor();
        true
    }

    /// Remove a rectangle. When the room's list becomes empty the room entry
    /// is removed entirely. Returns false if the rectangle doesn't exist.
    pub fn delete_rect(&mut self, handle: &RectHandle) -> bool {
        let Some(rects) = self.rooms.get_mut(&handle.room) else {
            return false;
        };
        let Some(index) = rects.iter().position(|r| r.id == handle.rect) else {
            return false;
        };
        rects.remove(index);
        if rects.is_empty() {
            self.rooms.remove(&handle.room);
        }
        true
    }
}
