//! Access-group search: picking a group highlights its rooms on the map.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::AccessGroup;
use crate::session::SessionState;
use crate::state::rooms::{RoomsMsg, RoomsOp, RoomsState};

/// Search over access groups. Selecting one fetches its rooms, highlights
/// them, and arms the request form for the group instead of a single room.
#[component]
pub fn AgSearch() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let query = RwSignal::new(String::new());

    // The group list is small; fetch it when the search mounts.
    Effect::new(move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        rooms.update(|r| r.reduce(RoomsMsg::Started(RoomsOp::AccessGroups)));
        leptos::task::spawn_local(async move {
            match api::fetch_access_groups(&token).await {
                Ok(groups) => rooms.update(|r| r.reduce(RoomsMsg::AccessGroupsLoaded(groups))),
                Err(error) => rooms.update(|r| r.reduce(RoomsMsg::Failed(error))),
            }
        });
    });

    let matches = move || {
        let needle = query.get().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        rooms.with(|r| {
            r.access_groups
                .iter()
                .filter(|ag| ag.name.to_lowercase().contains(&needle))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let pick = move |ag: AccessGroup| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let ag_id = ag.id.clone();
        rooms.update(|r| {
            r.reduce(RoomsMsg::SelectRoom(None));
            r.reduce(RoomsMsg::SelectRect(None));
            r.reduce(RoomsMsg::SelectAccessGroup(Some(ag)));
            r.reduce(RoomsMsg::AgSelected(true));
            r.reduce(RoomsMsg::Started(RoomsOp::RoomsInAg));
        });
        query.set(String::new());
        leptos::task::spawn_local(async move {
            match api::fetch_rooms_in_ag(&token, &ag_id).await {
                Ok(in_ag) => rooms.update(|r| r.reduce(RoomsMsg::RoomsInAgLoaded(in_ag))),
                Err(error) => rooms.update(|r| r.reduce(RoomsMsg::Failed(error))),
            }
        });
    };

    view! {
        <div class="ag-search">
            <input
                type="search"
                placeholder="Find an access group"
                prop:value=query
                on:input:target=move |ev| query.set(ev.target().value())
            />
            <ul>
                <For each=matches key=|ag| ag.id.clone() let:ag>
                    {
                        let label = ag.name.clone();
                        view! {
                            <li>
                                <button on:click=move |_| pick(ag.clone())>{label.clone()}</button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </div>
    }
}
