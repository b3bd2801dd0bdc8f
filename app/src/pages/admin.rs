//! Admin pages: account management, access groups, map editing, lockdown.

use leptos::prelude::*;

use crate::components::{
    create_account::CreateAccount, create_ag::CreateAg, header::Header, lockdown::Lockdown,
    manage_accounts::ManageAccounts, map_host::MapHost,
};
use crate::pages::{use_route_guard, use_section};

/// Admin area: `/admin/start`, `/admin/create_account`,
/// `/admin/manage_accounts`, `/admin/create_ag`, `/admin/edit_map`,
/// `/admin/lockdown`.
#[component]
pub fn AdminPage() -> impl IntoView {
    use_route_guard();
    let section = use_section();

    view! {
        <Header/>
        <main class="admin-page">
            {move || match section().as_str() {
                "create_account" => view! { <CreateAccount/> }.into_any(),
                "manage_accounts" => view! { <ManageAccounts/> }.into_any(),
                "create_ag" => view! { <CreateAg/> }.into_any(),
                "edit_map" => view! { <MapHost edit=true/> }.into_any(),
                "lockdown" => view! { <Lockdown/> }.into_any(),
                _ => view! { <MapHost/> }.into_any(),
            }}
        </main>
    }
}
