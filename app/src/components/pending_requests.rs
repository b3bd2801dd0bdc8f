//! The approver's queue of requests awaiting a decision.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::RequestKind;
use crate::session::SessionState;
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};
use crate::state::rooms::{RoomsMsg, RoomsState};

/// List of pending requests. Hovering one highlights its rooms on the map;
/// clicking selects it for [`super::answering_request::AnsweringRequest`].
#[component]
pub fn PendingRequests() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();

    Effect::new(move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::PendingRequests)));
        leptos::task::spawn_local(async move {
            match api::fetch_pending_requests(&token).await {
                Ok(requests) => {
                    directory.update(|d| d.reduce(DirectoryMsg::PendingLoaded(requests)));
                }
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    });

    let requests = move || directory.with(|d| d.pending_requests.clone());

    view! {
        <div class="pending-requests">
            <h2>"Pending requests"</h2>
            <ul>
                <For each=requests key=|req| req.id.clone() let:req>
                    {
                        let hover_rooms = req.rooms.clone();
                        let selected = req.clone();
                        let label = format!(
                            "{} {} — {} {}",
                            req.name,
                            req.surname,
                            match req.kind {
                                RequestKind::Room => "room",
                                RequestKind::Ag => "access group",
                            },
                            req.target,
                        );
                        view! {
                            <li
                                on:mouseenter=move |_| {
                                    rooms.update(|r| {
                                        r.reduce(RoomsMsg::HighlightRooms(hover_rooms.clone()));
                                    });
                                }
                                on:mouseleave=move |_| {
                                    rooms.update(|r| {
                                        r.reduce(RoomsMsg::HighlightRooms(Vec::new()));
                                    });
                                }
                            >
                                <button on:click=move |_| {
                                    directory.update(|d| {
                                        d.reduce(DirectoryMsg::SelectRequest(
                                            Some(selected.clone()),
                                        ));
                                    });
                                }>{label.clone()}</button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </div>
    }
}
