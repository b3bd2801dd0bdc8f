//! Admin account management: upgrades, card removal, deletion.

use leptos::prelude::*;

use crate::net::api;
use crate::session::SessionState;
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};

/// Combined reader/approver listing with per-row actions. Every mutation
/// refetches both lists so the table reflects the server.
#[component]
pub fn ManageAccounts() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();

    let refresh = move || {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::Users)));
        leptos::task::spawn_local(async move {
            let readers = api::fetch_admin_readers(&token).await;
            let approvers = api::fetch_admin_approvers(&token).await;
            match (readers, approvers) {
                (Ok(readers), Ok(approvers)) => {
                    let mut users = readers.clone();
                    users.extend(approvers.iter().cloned());
                    directory.update(|d| {
                        d.reduce(DirectoryMsg::ReadersLoaded(readers));
                        d.reduce(DirectoryMsg::ApproversLoaded(approvers));
                        d.reduce(DirectoryMsg::UsersLoaded(users));
                    });
                }
                (Err(error), _) | (_, Err(error)) => {
                    directory.update(|d| d.reduce(DirectoryMsg::Failed(error)));
                }
            }
        });
    };

    Effect::new(move |_| refresh());

    let act = move |action: fn(String, String) -> ActionFuture, email: String| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::Account)));
        leptos::task::spawn_local(async move {
            match action(token, email).await {
                Ok(()) => {
                    directory.update(|d| d.reduce(DirectoryMsg::Mutated));
                    refresh();
                }
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    };

    let users = move || directory.with(|d| d.users.clone());

    view! {
        <div class="manage-accounts">
            <h2>"Accounts"</h2>
            {move || {
                directory.with(|d| d.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })
            }}
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=users key=|user| user.email.clone() let:user>
                        {
                            let email = user.email.clone();
                            let e1 = email.clone();
                            let e2 = email.clone();
                            let e3 = email.clone();
                            let e4 = email.clone();
                            view! {
                                <tr>
                                    <td>{format!("{} {}", user.name, user.surname)}</td>
                                    <td>{email.clone()}</td>
                                    <td>
                                        <button on:click=move |_| act(to_approver, e1.clone())>
                                            "Make approver"
                                        </button>
                                        <button on:click=move |_| act(to_admin, e2.clone())>
                                            "Make admin"
                                        </button>
                                        <button on:click=move |_| act(remove_card, e3.clone())>
                                            "Remove card"
                                        </button>
                                        <button on:click=move |_| act(remove_user, e4.clone())>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </div>
    }
}

// Boxed wrappers so the row buttons can share one dispatch closure.

type ActionFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), String>>>>;

fn to_approver(token: String, email: String) -> ActionFuture {
    Box::pin(async move { api::upgrade_to_approver(&token, &email).await })
}

fn to_admin(token: String, email: String) -> ActionFuture {
    Box::pin(async move { api::upgrade_to_admin(&token, &email).await })
}

fn remove_card(token: String, email: String) -> ActionFuture {
    Box::pin(async move { api::delete_card(&token, &email).await })
}

fn remove_user(token: String, email: String) -> ActionFuture {
    Box::pin(async move { api::delete_user(&token, &email).await })
}
