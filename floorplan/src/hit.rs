#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::HANDLE_RADIUS_PX;
use crate::input::{Mode, Selection};
use crate::plan::{PlanRect, PlanStore, RectHandle};

/// Which part of a rectangle was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Every anchor, in clockwise order from north. Shared by hit testing
    /// and handle rendering.
    pub const ALL: [Self; 8] =
        [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// World-space position of this handle on `rect`.
    #[must_use]
    pub fn position(self, rect: &PlanRect) -> Point {
        let (left, top) = (rect.x, rect.y);
        let (cx, cy) = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
        match self {
            Self::N => Point::new(cx, top),
            Self::Ne => Point::new(right, top),
            Self::E => Point::new(right, cy),
            Self::Se => Point::new(right, bottom),
            Self::S => Point::new(cx, bottom),
            Self::Sw => Point::new(left, bottom),
            Self::W => Point::new(left, cy),
            Self::Nw => Point::new(left, top),
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub handle: RectHandle,
    pub part: HitPart,
}

/// Test what is under `world_pt`.
///
/// In edit mode the selected rectangle's resize handles are checked first,
/// with a screen-space slop of [`HANDLE_RADIUS_PX`]. Rectangle bodies are
/// then checked in reverse draw order so the topmost rectangle wins.
#[must_use]
pub fn hit_test(
    world_pt: Point,
    plan: &PlanStore,
    camera: &Camera,
    selection: Option<&Selection>,
    mode: Mode,
) -> Option<Hit> {
    if mode == Mode::Edit {
        if let Some(sel) = selection {
            let handle = sel.handle();
            if let Some(rect) = plan.get(&handle) {
                let slop = camera.screen_dist_to_world(HANDLE_RADIUS_PX);
                for anchor in ResizeAnchor::ALL {
                    let pos = anchor.position(rect);
                    if (world_pt.x - pos.x).abs() <= slop && (world_pt.y - pos.y).abs() <= slop {
                        return Some(Hit { handle, part: HitPart::ResizeHandle(anchor) });
                    }
                }
            }
        }
    }

    for room in plan.room_ids().into_iter().rev() {
        for rect in plan.rects(room).iter().rev() {
            if rect.contains(world_pt) {
                return Some(Hit {
                    handle: RectHandle { room: room.clone(), rect: rect.id },
                    part: HitPart::Body,
                });
            }
        }
    }
    None
}
