//! Navigation header shown on every role page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::session::{Role, SessionMsg, SessionState};
use crate::state::directory::{DirectoryMsg, DirectoryState};
use crate::state::rooms::{RoomsMsg, RoomsState};

/// Header with navigation and the logout menu.
///
/// "Start" clears the map selection, highlights, and the ag flag so the map
/// comes back in its neutral state. Logout resets every slice and returns to
/// the login page; the server call's outcome does not matter locally.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let navigate = use_navigate();

    let role = move || session.with(|s| s.session.as_ref().map(|x| x.role));
    let display_name = move || {
        session.with(|s| {
            s.session.as_ref().map(|x| format!("{} {}", x.name, x.surname)).unwrap_or_default()
        })
    };

    let go_start = {
        let navigate = navigate.clone();
        move |_| {
            rooms.update(|r| {
                r.reduce(RoomsMsg::SelectRoom(None));
                r.reduce(RoomsMsg::SelectRect(None));
                r.reduce(RoomsMsg::SelectAccessGroup(None));
                r.reduce(RoomsMsg::HighlightRooms(Vec::new()));
                r.reduce(RoomsMsg::AgSelected(false));
            });
            if let Some(role) = session.with_untracked(|s| s.session.as_ref().map(|x| x.role)) {
                navigate(&role.start_path(), Default::default());
            }
        }
    };

    let go_requests = {
        let navigate = navigate.clone();
        move |_| {
            if let Some(role) = session.with_untracked(|s| s.session.as_ref().map(|x| x.role)) {
                navigate(&format!("/{}/requests", role.as_str()), Default::default());
            }
        }
    };

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            let token =
                session.with_untracked(|s| s.token().map(str::to_owned)).unwrap_or_default();
            leptos::task::spawn_local(async move {
                api::logout(&token).await;
            });
            #[cfg(feature = "hydrate")]
            crate::session::clear_persisted();
            session.update(|s| s.reduce(SessionMsg::LoggedOut));
            rooms.update(|r| r.reduce(RoomsMsg::Reset));
            directory.update(|d| d.reduce(DirectoryMsg::Reset));
            navigate("/", Default::default());
        }
    };

    view! {
        <header class="app-header">
            <nav>
                <button on:click=go_start>"Start"</button>
                <button on:click=go_requests>"Requests"</button>
                {move || {
                    let navigate = use_navigate();
                    match role() {
                        Some(Role::Admin) => view! {
                            <>
                                <button on:click={
                                    let navigate = navigate.clone();
                                    move |_| navigate("/admin/manage_accounts", Default::default())
                                }>"Accounts"</button>
                                <button on:click={
                                    let navigate = navigate.clone();
                                    move |_| navigate("/admin/create_ag", Default::default())
                                }>"Access groups"</button>
                                <button on:click={
                                    let navigate = navigate.clone();
                                    move |_| navigate("/admin/edit_map", Default::default())
                                }>"Edit map"</button>
                                <button on:click=move |_| navigate("/admin/lockdown", Default::default())>
                                    "Lockdown"
                                </button>
                            </>
                        }
                        .into_any(),
                        Some(Role::Approver) => view! {
                            <button on:click=move |_| {
                                navigate("/approver/requests/revoke", Default::default());
                            }>"Revoke access"</button>
                        }
                        .into_any(),
                        _ => ().into_any(),
                    }
                }}
            </nav>
            <div class="user-menu">
                <span>{display_name}</span>
                <button on:click=logout>"Log out"</button>
            </div>
        </header>
    }
}
