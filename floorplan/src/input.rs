//! Input model: map modes, mouse buttons, and the gesture state machine.
//!
//! `Mode` distinguishes the read-only viewer from the admin editor.
//! `Gesture` is the active interaction being tracked between pointer-down and
//! pointer-up, carrying the context needed to compute incremental deltas and
//! emit final plan mutations on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::hit::ResizeAnchor;
use crate::plan::{RectGeom, RectHandle, RectId, RoomId};

/// Whether the map is the read-only viewer or the admin editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Read-only viewer: rectangles are clickable but not editable.
    #[default]
    View,
    /// Admin editor: rectangles can be created, moved, resized, and deleted.
    Edit,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, holding the name as reported by the browser
/// (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The currently selected rectangle and its room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub room: RoomId,
    pub rect: RectId,
}

impl Selection {
    /// The handle addressing the selected rectangle.
    #[must_use]
    pub fn handle(&self) -> RectHandle {
        RectHandle { room: self.room.clone(), rect: self.rect }
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the stage by dragging on empty canvas.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The user is moving a rectangle (edit mode only).
    DraggingRect {
        /// The rectangle being dragged.
        handle: RectHandle,
        /// World-space pointer position at the previous event.
        last_world: Point,
        /// Whether the pointer moved since pointer-down; a plain click
        /// selects without rewriting the plan.
        moved: bool,
    },
    /// The user is resizing a rectangle by one of its handles (edit mode only).
    ResizingRect {
        /// The rectangle being resized.
        handle: RectHandle,
        /// Which corner/edge handle is being dragged.
        anchor: ResizeAnchor,
        /// World-space pointer position at the start of the resize.
        start_world: Point,
        /// Geometry at the start of the resize.
        orig: RectGeom,
    },
}
