use std::collections::{HashMap, HashSet};

use web_sys::HtmlCanvasElement;

use crate::camera::{Camera, ImageDim, Point, Viewport};
use crate::consts::MIN_RECT_SIZE;
use crate::hit::{self, HitPart, ResizeAnchor};
use crate::input::{Button, Gesture, Key, Mode, Selection, WheelDelta};
use crate::paint::{Fill, RectFlags};
use crate::plan::{PlanStore, RectGeom, RectHandle, RoomGraphics, RoomId};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Viewer-relative access flags for one room, used for painting.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessFlags {
    pub has_access: bool,
    pub expiring: bool,
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A rectangle was clicked; carries the room and rectangle ids.
    RectSelected { room: RoomId, rect: crate::plan::RectId },
    /// The selection was cleared (click on empty canvas, deletion).
    SelectionCleared,
    /// The plan was edited; carries the full updated wire collection.
    PlanChanged(RoomGraphics),
    /// The scene must be redrawn.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub plan: PlanStore,
    pub camera: Camera,
    pub mode: Mode,
    pub selection: Option<Selection>,
    pub gesture: Gesture,
    pub viewport: Viewport,
    pub image: Option<ImageDim>,
    /// Room id typed into the editor's creation field.
    pub creation_id: String,
    /// Room ids that exist in the database; gates rectangle creation.
    pub legal_room_ids: Vec<String>,
    highlighted: HashSet<RoomId>,
    access: HashMap<RoomId, AccessFlags>,
    responsibilities: HashSet<RoomId>,
    /// Admins viewing the approver map are responsible for every room.
    all_responsible: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            plan: PlanStore::new(),
            camera: Camera::default(),
            mode: Mode::View,
            selection: None,
            gesture: Gesture::Idle,
            viewport: Viewport::default(),
            image: None,
            creation_id: String::new(),
            legal_room_ids: Vec::new(),
            highlighted: HashSet::new(),
            access: HashMap::new(),
            responsibilities: HashSet::new(),
            all_responsible: false,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self { mode, ..Self::default() }
    }

    // --- Data inputs ---

    /// Hydrate the plan from a server graphics blob.
    pub fn load_graphics(&mut self, graphics: &RoomGraphics) {
        self.plan.load(graphics);
        self.selection = None;
    }

    /// Replace the viewer's per-room access flags.
    pub fn set_access(&mut self, access: HashMap<RoomId, AccessFlags>) {
        self.access = access;
    }

    /// Replace the highlighted-room set.
    pub fn set_highlighted(&mut self, rooms: impl IntoIterator<Item = RoomId>) {
        self.highlighted = rooms.into_iter().collect();
    }

    /// Replace the responsible-room set (approver map).
    pub fn set_responsibilities(&mut self, rooms: impl IntoIterator<Item = RoomId>) {
        self.responsibilities = rooms.into_iter().collect();
    }

    /// Mark every room as responsible (admin viewing the approver map).
    pub fn set_all_responsible(&mut self, all: bool) {
        self.all_responsible = all;
    }

    /// Set the room id used for rectangle creation (editor text field).
    pub fn set_creation_id(&mut self, id: String) {
        self.creation_id = id;
    }

    /// Set the room ids that exist in the database.
    pub fn set_legal_room_ids(&mut self, ids: Vec<String>) {
        self.legal_room_ids = ids;
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and re-clamp the camera.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport = Viewport { width, height };
        self.camera.constrain(self.viewport, self.image);
        vec![Action::RenderNeeded]
    }

    /// Record the floor-plan image dimensions once the image has loaded.
    pub fn set_image(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.image = Some(ImageDim { width, height });
        self.camera.constrain(self.viewport, self.image);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently selected rectangle, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The view-mode fill for one room's rectangles.
    #[must_use]
    pub fn fill_for(&self, room: &str) -> Fill {
        let access = self.access.get(room).copied().unwrap_or_default();
        Fill::derive(RectFlags {
            selected_room: self.selection.as_ref().is_some_and(|s| s.room == room),
            highlighted: self.highlighted.contains(room),
            expiring: access.expiring,
            has_access: access.has_access,
            responsible: self.all_responsible || self.responsibilities.contains(room),
        })
    }

    // --- Input events ---

    /// Pointer-down: select a rectangle, start a resize, or start panning.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen);
        match hit::hit_test(world, &self.plan, &self.camera, self.selection.as_ref(), self.mode) {
            Some(hit) => match hit.part {
                HitPart::Body => self.press_rect(hit.handle, world),
                HitPart::ResizeHandle(anchor) => self.press_handle(hit.handle, anchor, world),
            },
            None => self.press_empty(screen),
        }
    }

    fn press_rect(&mut self, handle: RectHandle, world: Point) -> Vec<Action> {
        self.selection = Some(Selection { room: handle.room.clone(), rect: handle.rect });
        if self.mode == Mode::Edit {
            self.gesture = Gesture::DraggingRect { handle: handle.clone(), last_world: world, moved: false };
        }
        vec![
            Action::RectSelected { room: handle.room, rect: handle.rect },
            Action::RenderNeeded,
        ]
    }

    fn press_handle(&mut self, handle: RectHandle, anchor: ResizeAnchor, world: Point) -> Vec<Action> {
        let Some(orig) = self.plan.get(&handle).map(crate::plan::PlanRect::geom) else {
            return Vec::new();
        };
        self.gesture = Gesture::ResizingRect { handle, anchor, start_world: world, orig };
        Vec::new()
    }

    fn press_empty(&mut self, screen: Point) -> Vec<Action> {
        let had_selection = self.selection.take().is_some();
        self.gesture = Gesture::Panning { last_screen: screen };
        if had_selection {
            vec![Action::SelectionCleared, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Pointer-move: advance the active gesture.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        match self.gesture.clone() {
            Gesture::Idle => Vec::new(),
            Gesture::Panning { last_screen } => {
                self.camera.pan_by(
                    screen.x - last_screen.x,
                    screen.y - last_screen.y,
                    self.viewport,
                    self.image,
                );
                self.gesture = Gesture::Panning { last_screen: screen };
                vec![Action::RenderNeeded]
            }
            Gesture::DraggingRect { handle, last_world, .. } => {
                let world = self.camera.screen_to_world(screen);
                if let Some(rect) = self.plan.get(&handle) {
                    let (x, y) = (rect.x + world.x - last_world.x, rect.y + world.y - last_world.y);
                    self.plan.move_rect(&handle, x, y);
                }
                self.gesture = Gesture::DraggingRect { handle, last_world: world, moved: true };
                vec![Action::RenderNeeded]
            }
            Gesture::ResizingRect { handle, anchor, start_world, orig } => {
                let world = self.camera.screen_to_world(screen);
                let geom = resized_geom(orig, anchor, world.x - start_world.x, world.y - start_world.y);
                // Raw geometry during the gesture; flooring happens on release.
                self.plan.set_geom(&handle, geom);
                self.gesture = Gesture::ResizingRect { handle, anchor, start_world, orig };
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Pointer-up: finish the active gesture, emitting plan mutations.
    pub fn on_pointer_up(&mut self, _screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            Gesture::Idle | Gesture::Panning { .. } => Vec::new(),
            Gesture::DraggingRect { moved, .. } => {
                if moved {
                    vec![Action::PlanChanged(self.plan.to_wire()), Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            Gesture::ResizingRect { handle, .. } => {
                let geom = self.plan.get(&handle).map(crate::plan::PlanRect::geom);
                if let Some(geom) = geom {
                    self.plan.resize_rect(&handle, geom);
                }
                vec![Action::PlanChanged(self.plan.to_wire()), Action::RenderNeeded]
            }
        }
    }

    /// Wheel: zoom around the pointer, respecting the scale floor.
    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta) -> Vec<Action> {
        if self.camera.zoom_at(screen, delta.dy, self.viewport, self.image) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Double-click on empty canvas (edit mode): append a default rectangle
    /// for the room named in the creation field.
    pub fn on_double_click(&mut self, screen: Point) -> Vec<Action> {
        if self.mode != Mode::Edit {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen);
        let creation_id = self.creation_id.clone();
        match self.plan.add_rect(&creation_id, world, &self.legal_room_ids) {
            Some(_) => vec![Action::PlanChanged(self.plan.to_wire()), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Key-down: Delete removes the selected rectangle (edit mode).
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if self.mode != Mode::Edit || key.0 != "Delete" {
            return Vec::new();
        }
        let Some(selection) = self.selection.take() else {
            return Vec::new();
        };
        if self.plan.delete_rect(&selection.handle()) {
            vec![
                Action::PlanChanged(self.plan.to_wire()),
                Action::SelectionCleared,
                Action::RenderNeeded,
            ]
        } else {
            vec![Action::SelectionCleared, Action::RenderNeeded]
        }
    }
}

/// Geometry after dragging `anchor` by `(dx, dy)` from `orig`.
///
/// Edges opposite the anchor stay put; width/height never drop below
/// [`MIN_RECT_SIZE`] during the gesture.
fn resized_geom(orig: RectGeom, anchor: ResizeAnchor, dx: f64, dy: f64) -> RectGeom {
    use ResizeAnchor::{E, N, Ne, Nw, S, Se, Sw, W};

    let mut geom = orig;
    if matches!(anchor, E | Ne | Se) {
        geom.width = orig.width + dx;
    }
    if matches!(anchor, W | Nw | Sw) {
        geom.width = orig.width - dx;
        geom.x = orig.x + dx;
    }
    if matches!(anchor, S | Se | Sw) {
        geom.height = orig.height + dy;
    }
    if matches!(anchor, N | Ne | Nw) {
        geom.height = orig.height - dy;
        geom.y = orig.y + dy;
    }

    if geom.width < MIN_RECT_SIZE {
        if matches!(anchor, W | Nw | Sw) {
            geom.x = orig.x + orig.width - MIN_RECT_SIZE;
        }
        geom.width = MIN_RECT_SIZE;
    }
    if geom.height < MIN_RECT_SIZE {
        if matches!(anchor, N | Ne | Nw) {
            geom.y = orig.y + orig.height - MIN_RECT_SIZE;
        }
        geom.height = MIN_RECT_SIZE;
    }
    geom
}

/// The full map engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, mode: Mode) -> Self {
        Self { canvas, core: EngineCore::new(mode) }
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(
        &self,
        image: Option<&web_sys::HtmlImageElement>,
    ) -> Result<(), wasm_bindgen::JsValue> {
        crate::render::draw(&self.canvas, &self.core, image)
    }
}
