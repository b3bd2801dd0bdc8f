//! Room search box: filters rooms by id or name and selects one on the map.

use leptos::prelude::*;

use crate::state::rooms::{RoomsMsg, RoomsState};

/// Search over the rooms the viewer knows about (`room_data`). Picking a
/// room selects and highlights it on the map.
#[component]
pub fn RoomSearch() -> impl IntoView {
    let rooms = expect_context::<RwSignal<RoomsState>>();
    let query = RwSignal::new(String::new());

    let matches = move || {
        let needle = query.get().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<(String, String)> = rooms.with(|r| {
            r.room_data
                .iter()
                .filter(|(id, meta)| {
                    id.to_lowercase().contains(&needle)
                        || meta.name.to_lowercase().contains(&needle)
                })
                .map(|(id, meta)| (id.clone(), meta.name.clone()))
                .collect()
        });
        hits.sort();
        hits
    };

    let pick = move |room_id: String| {
        rooms.update(|r| {
            r.reduce(RoomsMsg::HighlightRooms(vec![room_id.clone()]));
            r.reduce(RoomsMsg::SelectRoom(Some(room_id)));
            r.reduce(RoomsMsg::AgSelected(false));
        });
        query.set(String::new());
    };

    view! {
        <div class="room-search">
            <input
                type="search"
                placeholder="Find a room"
                prop:value=query
                on:input:target=move |ev| query.set(ev.target().value())
            />
            <ul>
                <For each=matches key=|(id, _)| id.clone() let:entry>
                    {
                        let (id, name) = entry;
                        let label = format!("{name} ({id})");
                        view! {
                            <li>
                                <button on:click=move |_| pick(id.clone())>{label}</button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </div>
    }
}
