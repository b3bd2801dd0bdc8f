//! Revocation panel: the grants held by the selected reader, each with a
//! revoke button.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{ReaderAccess, RequestKind};
use crate::session::SessionState;
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};

/// Lists the selected reader's grants; revoking one refetches the list.
#[component]
pub fn RevokeForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();

    let revoke = move |grant: ReaderAccess| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let Some(email) =
            directory.with_untracked(|d| d.selected_user.as_ref().map(|u| u.email.clone()))
        else {
            return;
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::Revoke)));
        leptos::task::spawn_local(async move {
            let outcome = match grant.kind {
                RequestKind::Room => api::revoke_room(&token, &email, &grant.id).await,
                RequestKind::Ag => api::revoke_ag(&token, &email, &grant.id).await,
            };
            match outcome {
                Ok(()) => {
                    directory.update(|d| d.reduce(DirectoryMsg::Mutated));
                    match api::fetch_access_for_reader(&token, &email).await {
                        Ok(access) => {
                            directory.update(|d| d.reduce(DirectoryMsg::ReaderAccessLoaded(access)));
                        }
                        Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
                    }
                }
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    };

    let grants = move || directory.with(|d| d.reader_access.clone());

    view! {
        <div class="revoke-form">
            {move || {
                let user = directory.with(|d| d.selected_user.clone());
                match user {
                    None => view! { <p>"Pick a reader to see their access."</p> }.into_any(),
                    Some(user) => view! {
                        <h2>{format!("Access held by {} {}", user.name, user.surname)}</h2>
                    }
                    .into_any(),
                }
            }}
            <ul>
                <For each=grants key=|grant| (grant.kind, grant.id.clone()) let:grant>
                    {
                        let label = match grant.kind {
                            RequestKind::Room => format!("Room {}", grant.name),
                            RequestKind::Ag => format!("Access group {}", grant.name),
                        };
                        let target = grant.clone();
                        view! {
                            <li>
                                <span>{label}</span>
                                <button
                                    disabled=move || directory.with(|d| d.loading)
                                    on:click=move |_| revoke(target.clone())
                                >
                                    "Revoke"
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>
            {move || {
                directory.with(|d| d.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })
            }}
        </div>
    }
}
