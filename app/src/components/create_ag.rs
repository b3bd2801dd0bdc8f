//! Admin form for creating an access group over a set of rooms.

use leptos::prelude::*;

use crate::net::api;
use crate::session::SessionState;
use crate::state::rooms::{RoomsMsg, RoomsOp, RoomsState};

/// Access-group creation: a name plus any number of rooms picked from the
/// database's room list.
#[component]
pub fn CreateAg() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();

    let name = RwSignal::new(String::new());
    let chosen = RwSignal::new(Vec::<String>::new());
    let created = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        rooms.update(|r| r.reduce(RoomsMsg::Started(RoomsOp::LegalRooms)));
        leptos::task::spawn_local(async move {
            match api::fetch_admin_rooms(&token).await {
                Ok(ids) => rooms.update(|r| r.reduce(RoomsMsg::LegalRoomsLoaded(ids))),
                Err(error) => rooms.update(|r| r.reduce(RoomsMsg::Failed(error))),
            }
        });
    });

    let toggle = move |room_id: String| {
        chosen.update(|list| {
            if let Some(pos) = list.iter().position(|r| *r == room_id) {
                list.remove(pos);
            } else {
                list.push(room_id);
            }
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let name_v = name.get_untracked();
        let rooms_v = chosen.get_untracked();
        created.set(None);
        rooms.update(|r| r.reduce(RoomsMsg::Started(RoomsOp::SaveMap)));
        leptos::task::spawn_local(async move {
            match api::create_access_group(&token, &name_v, &rooms_v).await {
                Ok(()) => {
                    rooms.update(|r| r.reduce(RoomsMsg::Saved));
                    created.set(Some(format!("Created access group \"{name_v}\".")));
                    name.set(String::new());
                    chosen.set(Vec::new());
                }
                Err(error) => rooms.update(|r| r.reduce(RoomsMsg::Failed(error))),
            }
        });
    };

    let legal = move || rooms.with(|r| r.legal_room_ids.clone());

    view! {
        <form class="create-ag" on:submit=submit>
            <h2>"Create access group"</h2>
            <label>
                "Name"
                <input prop:value=name on:input:target=move |ev| name.set(ev.target().value())/>
            </label>
            <fieldset>
                <legend>"Rooms"</legend>
                <For each=legal key=|id| id.clone() let:id>
                    {
                        let room_id = id.clone();
                        let check_id = id.clone();
                        view! {
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        chosen.with(|list| list.contains(&check_id))
                                    }
                                    on:change=move |_| toggle(room_id.clone())
                                />
                                {id.clone()}
                            </label>
                        }
                    }
                </For>
            </fieldset>
            <button type="submit" disabled=move || rooms.with(|r| r.loading)>
                "Create"
            </button>
            {move || created.get().map(|m| view! { <p class="form-success">{m}</p> })}
            {move || {
                rooms.with(|r| r.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })
            }}
        </form>
    }
}
