//! The reader's own request history.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::RequestKind;
use crate::session::SessionState;
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};

/// Table of the reader's submitted requests and their statuses.
#[component]
pub fn RequestsTable() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();

    Effect::new(move |_| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::Orders)));
        leptos::task::spawn_local(async move {
            match api::fetch_orders(&token).await {
                Ok(orders) => directory.update(|d| d.reduce(DirectoryMsg::OrdersLoaded(orders))),
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    });

    let rows = move || directory.with(|d| d.orders.clone());

    view! {
        <div class="requests-table">
            <h2>"My requests"</h2>
            {move || {
                directory.with(|d| d.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })
            }}
            <table>
                <thead>
                    <tr>
                        <th>"Target"</th>
                        <th>"Kind"</th>
                        <th>"Status"</th>
                        <th>"Submitted"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=rows key=|order| order.id.clone() let:order>
                        <tr>
                            <td>{order.target.clone()}</td>
                            <td>
                                {match order.kind {
                                    RequestKind::Room => "room",
                                    RequestKind::Ag => "access group",
                                }}
                            </td>
                            <td>{order.status.clone()}</td>
                            <td>{order.created_at.clone().unwrap_or_default()}</td>
                        </tr>
                    </For>
                </tbody>
            </table>
        </div>
    }
}
