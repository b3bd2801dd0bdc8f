//! Reader search for the approver's revoke page.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::UserRow;
use crate::session::SessionState;
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};

/// Search over the readers this approver can see. Picking one loads the
/// grants they currently hold, feeding [`super::revoke_form::RevokeForm`].
#[component]
pub fn UserSearch() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let query = RwSignal::new(String::new());

    Effect::new(move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::Readers)));
        leptos::task::spawn_local(async move {
            match api::fetch_approver_readers(&token).await {
                Ok(readers) => directory.update(|d| d.reduce(DirectoryMsg::ReadersLoaded(readers))),
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
            d.readers
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
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let email = user.email.clone();
        directory.update(|d| {
            d.reduce(DirectoryMsg::SelectUser(Some(user)));
            d.reduce(DirectoryMsg::Started(DirectoryOp::ReaderAccess));
        });
        query.set(String::new());
        leptos::task::spawn_local(async move {
            match api::fetch_access_for_reader(&token, &email).await {
                Ok(access) => {
                    directory.update(|d| d.reduce(DirectoryMsg::ReaderAccessLoaded(access)));
                }
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    };

    view! {
        <div class="user-search">
            <input
                type="search"
                placeholder="Find a reader"
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
