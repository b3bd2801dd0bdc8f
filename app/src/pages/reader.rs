//! Reader pages: the access map, request history, and the request form.

use leptos::prelude::*;

use crate::components::{
    ag_search::AgSearch, header::Header, map_host::MapHost, request_form::RequestForm,
    requests_table::RequestsTable, room_search::RoomSearch,
};
use crate::pages::{use_route_guard, use_section};

/// Reader area: `/reader/start`, `/reader/requests`, `/reader/requests/form`.
#[component]
pub fn ReaderPage() -> impl IntoView {
    use_route_guard();
    let section = use_section();

    view! {
        <Header/>
        <main class="reader-page">
            {move || match section().as_str() {
                "requests" => view! { <RequestsTable/> }.into_any(),
                "requests/form" => view! { <RequestForm/> }.into_any(),
                _ => view! {
                    <div class="map-layout">
                        <aside>
                            <RoomSearch/>
                            <AgSearch/>
                        </aside>
                        <MapHost/>
                    </div>
                }
                .into_any(),
            }}
        </main>
    }
}
