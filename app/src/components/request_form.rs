//! Access-request form for the selected room or access group.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::session::SessionState;
use crate::state::rooms::{RoomsMsg, RoomsOp, RoomsState};

/// The request form.
///
/// Targets the selected access group when the ag flag is set, otherwise the
/// selected room. Submission is gated by the terms checkbox: unchecked means
/// an inline error and no network call. Success clears the transient map
/// state and navigates back to the start page; a server error is shown
/// verbatim.
#[component]
pub fn RequestForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let navigate = use_navigate();

    let justification = RwSignal::new(String::new());
    let terms_accepted = RwSignal::new(false);
    let local_error = RwSignal::new(Option::<String>::None);

    let target_label = move || {
        rooms.with(|r| {
            if r.ag_selected {
                r.selected_ag.as_ref().map(|ag| format!("Access group: {}", ag.name))
            } else {
                r.selected_room.as_ref().map(|id| {
                    let name =
                        r.room_data.get(id).map_or_else(|| id.clone(), |meta| meta.name.clone());
                    format!("Room: {name} ({id})")
                })
            }
        })
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !terms_accepted.get_untracked() {
            local_error.set(Some("You must accept the terms of access.".to_owned()));
            return;
        }
        local_error.set(None);
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let ag_selected = rooms.with_untracked(|r| r.ag_selected);
        let target = rooms.with_untracked(|r| {
            if ag_selected {
                r.selected_ag.as_ref().map(|ag| ag.id.clone())
            } else {
                r.selected_room.clone()
            }
        });
        let Some(target) = target else {
            local_error.set(Some("Pick a room or an access group first.".to_owned()));
            return;
        };
        let reason = justification.get_untracked();
        rooms.update(|r| r.reduce(RoomsMsg::Started(RoomsOp::SubmitRequest)));
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = if ag_selected {
                api::request_ag(&token, &target, &reason).await
            } else {
                api::request_room(&token, &target, &reason).await
            };
            match outcome {
                Ok(()) => {
                    rooms.update(|r| {
                        r.reduce(RoomsMsg::Saved);
                        r.reduce(RoomsMsg::SelectRoom(None));
                        r.reduce(RoomsMsg::SelectRect(None));
                        r.reduce(RoomsMsg::SelectAccessGroup(None));
                        r.reduce(RoomsMsg::HighlightRooms(Vec::new()));
                        r.reduce(RoomsMsg::AgSelected(false));
                    });
                    if let Some(role) =
                        session.with_untracked(|s| s.session.as_ref().map(|x| x.role))
                    {
                        navigate(&role.start_path(), Default::default());
                    }
                }
                Err(error) => {
                    rooms.update(|r| r.reduce(RoomsMsg::Failed(error)));
                }
            }
        });
    };

    view! {
        <form class="request-form" on:submit=submit>
            <h2>"Request access"</h2>
            {move || match target_label() {
                Some(label) => view! { <p class="target">{label}</p> }.into_any(),
                None => view! { <p class="target">"No room or group selected."</p> }.into_any(),
            }}
            <label>
                "Justification"
                <textarea
                    prop:value=justification
                    on:input:target=move |ev| justification.set(ev.target().value())
                />
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=terms_accepted
                    on:change:target=move |ev| terms_accepted.set(ev.target().checked())
                />
                "I accept the terms of access"
            </label>
            <button type="submit" disabled=move || rooms.with(|r| r.loading)>
                "Submit request"
            </button>
            {move || local_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || {
                rooms.with(|r| r.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })
            }}
        </form>
    }
}
