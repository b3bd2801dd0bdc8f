//! # app
//!
//! Leptos + WASM front-end for the access-management system. Readers request
//! access to rooms and access groups on an interactive floor plan, approvers
//! review and decide those requests, and admins manage accounts, access
//! groups, and the map itself.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client. It integrates with the `floorplan` crate for
//! imperative canvas rendering via the `MapHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
