//! Decision panel for the selected pending request.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Decision, RequestKind};
use crate::session::SessionState;
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};

/// Shows the selected request's details and submits a grant/deny decision.
/// After a decision the queue is refetched and the selection cleared.
#[component]
pub fn AnsweringRequest() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();

    let decide = move |grant: bool| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let Some(request) = directory.with_untracked(|d| d.selected_request.clone()) else {
            return;
        };
        let decision = Decision {
            request_id: request.id.clone(),
            kind: request.kind,
            is_access_granted: grant,
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::Decision)));
        leptos::task::spawn_local(async move {
            match api::send_decision(&token, &decision).await {
                Ok(()) => {
                    directory.update(|d| {
                        d.reduce(DirectoryMsg::Mutated);
                        d.reduce(DirectoryMsg::SelectRequest(None));
                    });
                    match api::fetch_pending_requests(&token).await {
                        Ok(requests) => {
                            directory.update(|d| d.reduce(DirectoryMsg::PendingLoaded(requests)));
                        }
                        Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
                    }
                }
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    };

    view! {
        <div class="answering-request">
            {move || {
                let request = directory.with(|d| d.selected_request.clone());
                match request {
                    None => view! { <p>"Select a request to review it."</p> }.into_any(),
                    Some(req) => {
                        let kind = match req.kind {
                            RequestKind::Room => "Room",
                            RequestKind::Ag => "Access group",
                        };
                        view! {
                            <div>
                                <h2>{format!("{} {} <{}>", req.name, req.surname, req.email)}</h2>
                                <p>{format!("{kind}: {}", req.target)}</p>
                                <blockquote>{req.justification.clone()}</blockquote>
                                <button
                                    disabled=move || directory.with(|d| d.loading)
                                    on:click=move |_| decide(true)
                                >
                                    "Grant"
                                </button>
                                <button
                                    disabled=move || directory.with(|d| d.loading)
                                    on:click=move |_| decide(false)
                                >
                                    "Deny"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
            {move || {
                directory.with(|d| d.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })
            }}
        </div>
    }
}
