//! Shared numeric constants for the floor-plan crate.

// ── Camera ──────────────────────────────────────────────────────

/// Multiplicative scale step applied per wheel event.
pub const ZOOM_STEP: f64 = 1.05;

/// Scale floor: once below this, further zoom-out is ignored.
pub const MIN_SCALE: f64 = 0.15;

/// Camera offset when a map view first loads.
pub const START_X: f64 = -800.0;
pub const START_Y: f64 = -700.0;

/// Camera scale when a map view first loads.
pub const START_SCALE: f64 = 0.5;

// ── Rectangles ──────────────────────────────────────────────────

/// Side length of a rectangle created by double-click, in world units.
pub const DEFAULT_RECT_SIZE: f64 = 100.0;

/// Minimum rectangle width/height after a resize.
pub const MIN_RECT_SIZE: f64 = 2.0;

/// Fill opacity for room rectangles.
pub const RECT_OPACITY: f64 = 0.5;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Host ────────────────────────────────────────────────────────

/// Delay before remeasuring the viewport after a window resize, in ms.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
