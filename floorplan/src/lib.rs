//! Canvas engine for the building floor-plan map.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interactive map used across the access-control UI: translating raw DOM
//! input events into plan mutations and selection changes, maintaining camera
//! state for pan/zoom over the floor-plan image, hit-testing room rectangles,
//! and rendering the scene. The host Leptos layer is responsible only for
//! wiring DOM events to the engine and persisting the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`plan`] | In-memory room/rectangle store and wire types |
//! | [`camera`] | Pan/zoom camera, coordinate conversions, bound clamping |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against room rectangles and resize handles |
//! | [`paint`] | Access-level fill derivation for rectangles |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum sizes, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod paint;
pub mod plan;
pub mod render;
