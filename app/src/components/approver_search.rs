//! Approver search for admin account pages.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::UserRow;
use crate::session::SessionState;
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};

/// Search over approver accounts; picking one selects it in the directory.
#[component]
pub fn ApproverSearch() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let query = RwSignal::new(String::new());

    Effect::new(move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::Approvers)));
        leptos::task::spawn_local(async move {
            match api::fetch_admin_approvers(&token).await {
                Ok(approvers) => {
                    directory.update(|d| d.reduce(DirectoryMsg::ApproversLoaded(approvers)));
                }
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    });

    let matches = move || {
        let needle = query.get().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        directory.with(|d| {
            d.approvers
                .iter()
                .filter(|u| {
                    u.email.to_lowercase().contains(&needle)
                        || u.name.to_lowercase().contains(&needle)
                        || u.surname.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let pick = move |user: UserRow| {
        directory.update(|d| d.reduce(DirectoryMsg::SelectUser(Some(user))));
        query.set(String::new());
    };

    view! {
        <div class="approver-search">
            <input
                type="search"
                placeholder="Find an approver"
                prop:value=query
                on:input:target=move |ev| query.set(ev.target().value())
            />
            <ul>
                <For each=matches key=|user| user.email.clone() let:user>
                    {
                        let label = format!("{} {} <{}>", user.name, user.surname, user.email);
                        view! {
                            <li>
                                <button on:click=move |_| pick(user.clone())>{label.clone()}</button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </div>
    }
}
