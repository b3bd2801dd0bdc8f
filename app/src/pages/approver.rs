//! Approver pages: the responsibility map, pending requests, and revocation.

use leptos::prelude::*;

use crate::components::{
    answering_request::AnsweringRequest, header::Header, map_host::MapHost,
    pending_requests::PendingRequests, revoke_form::RevokeForm, user_search::UserSearch,
};
use crate::pages::{use_route_guard, use_section};

/// Approver area: `/approver/start`, `/approver/requests`,
/// `/approver/requests/revoke`.
#[component]
pub fn ApproverPage() -> impl IntoView {
    use_route_guard();
    let section = use_section();

    view! {
        <Header/>
        <main class="approver-page">
            {move || match section().as_str() {
                "requests" => view! {
                    <div class="requests-layout">
                        <PendingRequests/>
                        <AnsweringRequest/>
                    </div>
                }
                .into_any(),
                "requests/revoke" => view! {
                    <div class="revoke-layout">
                        <UserSearch/>
                        <RevokeForm/>
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div class="map-layout">
                        <aside>
                            <PendingRequests/>
                        </aside>
                        <MapHost/>
                    </div>
                }
                .into_any(),
            }}
        </main>
    }
}
