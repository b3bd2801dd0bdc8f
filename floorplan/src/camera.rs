#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MIN_SCALE, START_SCALE, START_X, START_Y, ZOOM_STEP};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport dimensions in CSS pixels, measured from the stage container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Natural dimensions of the floor-plan image in world units.
///
/// Unknown until the image has loaded; clamping is skipped until then.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDim {
    pub width: f64,
    pub height: f64,
}

/// Camera state for pan/zoom over the floor-plan image.
///
/// `x` / `y` are the stage offset in CSS pixels. `scale` is a uniform
/// scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { x: START_X, y: START_Y, scale: START_SCALE }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.x) / self.scale,
            y: (screen.y - self.y) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.x,
            y: world.y * self.scale + self.y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Pan the camera by a screen-space delta and re-clamp.
    pub fn pan_by(&mut self, dx: f64, dy: f64, viewport: Viewport, image: Option<ImageDim>) {
        self.x += dx;
        self.y += dy;
        self.constrain(viewport, image);
    }

    /// Apply one wheel event centered on `pointer` (screen space).
    ///
    /// `dy < 0` zooms in by [`ZOOM_STEP`], `dy > 0` zooms out. Once the scale
    /// has fallen below [`MIN_SCALE`], further zoom-out events are ignored.
    /// The world point under the pointer stays under the pointer, then the
    /// offset is re-clamped. Returns whether the camera changed.
    pub fn zoom_at(
        &mut self,
        pointer: Point,
        dy: f64,
        viewport: Viewport,
        image: Option<ImageDim>,
    ) -> bool {
        if self.scale < MIN_SCALE && dy > 0.0 {
            return false;
        }
        let world = self.screen_to_world(pointer);
        self.scale = if dy < 0.0 { self.scale * ZOOM_STEP } else { self.scale / ZOOM_STEP };
        self.x = pointer.x - world.x * self.scale;
        self.y = pointer.y - world.y * self.scale;
        self.constrain(viewport, image);
        true
    }

    /// Clamp the offset so the floor-plan image cannot be dragged fully out
    /// of the viewport.
    ///
    /// Per axis: if the scaled image extent does not exceed the viewport, the
    /// offset is forced to 0; otherwise it is clamped into
    /// `[viewport - image * scale, 0]`. A no-op until the image dimensions
    /// are known.
    pub fn constrain(&mut self, viewport: Viewport, image: Option<ImageDim>) {
        let Some(image) = image else {
            return;
        };

        let scaled_w = image.width * self.scale;
        if viewport.width <= scaled_w {
            self.x = self.x.clamp(viewport.width - scaled_w, 0.0);
        } else {
            self.x = 0.0;
        }

        let scaled_h = image.height * self.scale;
        if viewport.height <= scaled_h {
            self.y = self.y.clamp(viewport.height - scaled_h, 0.0);
        } else {
            self.y = 0.0;
        }
    }
}
