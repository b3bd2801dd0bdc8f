//! Top-level pages, one per role plus login.

pub mod admin;
pub mod approver;
pub mod login;
pub mod reader;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use crate::session::{SessionState, route_allowed};

/// Kick anyone who may not visit the current path back to the login page.
///
/// Runs as an effect so a logout while the page is open also triggers the
/// redirect. No session always redirects (the guard fails closed).
pub(crate) fn use_route_guard() {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        let allowed = session.with(|s| route_allowed(s.session.as_ref(), &path));
        if !allowed {
            navigate("/", Default::default());
        }
    });
}

/// The wildcard remainder of the current role route ("start", "requests",
/// "requests/form", ...).
pub(crate) fn use_section() -> impl Fn() -> String + Copy {
    let params = use_params_map();
    move || params.with(|p| p.get("rest").unwrap_or_default())
}
