//! Rendering: draws the floor-plan scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only engine state
//! and produces pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::RECT_OPACITY;
use crate::engine::EngineCore;
use crate::hit::ResizeAnchor;
use crate::input::Mode;
use crate::paint;

/// Stroke color for rectangle outlines and resize handles.
const STROKE: &str = "black";

/// Resize handle side length in screen pixels.
const HANDLE_SIZE_PX: f64 = 8.0;

/// Draw the full scene: floor-plan image, room rectangles, and selection UI.
///
/// # Errors
///
/// Returns `Err` if the 2D context is unavailable or a draw call fails.
pub fn draw(
    canvas: &HtmlCanvasElement,
    core: &EngineCore,
    image: Option<&HtmlImageElement>,
) -> Result<(), JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    // Layer 1: clear and set up the camera transform.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport.width, core.viewport.height);
    ctx.translate(core.camera.x, core.camera.y)?;
    ctx.scale(core.camera.scale, core.camera.scale)?;

    // Layer 2: the floor-plan image.
    if let Some(image) = image {
        ctx.draw_image_with_html_image_element(image, 0.0, 0.0)?;
    }

    // Layer 3: room rectangles in room-id order.
    ctx.set_global_alpha(RECT_OPACITY);
    for room in core.plan.room_ids() {
        let selected_room = core.selection().is_some_and(|s| &s.room == room);
        let fill = match core.mode {
            Mode::View => core.fill_for(room).css(),
            Mode::Edit => paint::edit_fill(selected_room),
        };
        for rect in core.plan.rects(room) {
            ctx.set_fill_style_str(fill);
            ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }
    }
    ctx.set_global_alpha(1.0);

    // Layer 4: selection outline and edit-mode resize handles.
    if let Some(selection) = core.selection() {
        if let Some(rect) = core.plan.get(&selection.handle()) {
            ctx.set_stroke_style_str(STROKE);
            ctx.set_line_width(core.camera.screen_dist_to_world(2.0));
            ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);

            if core.mode == Mode::Edit {
                let size = core.camera.screen_dist_to_world(HANDLE_SIZE_PX);
                for anchor in ResizeAnchor::ALL {
                    let pos = anchor.position(rect);
                    ctx.set_fill_style_str("white");
                    ctx.fill_rect(pos.x - size / 2.0, pos.y - size / 2.0, size, size);
                    ctx.stroke_rect(pos.x - size / 2.0, pos.y - size / 2.0, size, size);
                }
            }
        }
    }

    Ok(())
}
