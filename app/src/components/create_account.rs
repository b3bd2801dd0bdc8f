//! Admin form for creating reader/approver/admin accounts.

use leptos::prelude::*;

use crate::net::api;
use crate::session::{Role, SessionState};
use crate::state::directory::{DirectoryMsg, DirectoryOp, DirectoryState};

/// Account-creation form. The role is mandatory; per-field validation
/// errors from the server are shown as one line each.
#[component]
pub fn CreateAccount() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let directory = expect_context::<RwSignal<DirectoryState>>();

    let name = RwSignal::new(String::new());
    let surname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Option::<Role>::None);
    let local_error = RwSignal::new(Option::<String>::None);
    let created = RwSignal::new(Option::<String>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(chosen_role) = role.get_untracked() else {
            local_error.set(Some("Choose a role for the new account.".to_owned()));
            return;
        };
        local_error.set(None);
        created.set(None);
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        let name_v = name.get_untracked();
        let surname_v = surname.get_untracked();
        let email_v = email.get_untracked();
        let password_v = password.get_untracked();
        directory.update(|d| d.reduce(DirectoryMsg::Started(DirectoryOp::Account)));
        leptos::task::spawn_local(async move {
            match api::create_account(&token, chosen_role, &name_v, &surname_v, &email_v, &password_v)
                .await
            {
                Ok(()) => {
                    directory.update(|d| d.reduce(DirectoryMsg::Mutated));
                    created.set(Some(format!("Created {} account for {email_v}.",
                        chosen_role.as_str())));
                    name.set(String::new());
                    surname.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                }
                Err(error) => directory.update(|d| d.reduce(DirectoryMsg::Failed(error))),
            }
        });
    };

    let set_role = move |value: String| {
        role.set(match value.as_str() {
            "reader" => Some(Role::Reader),
            "approver" => Some(Role::Approver),
            "admin" => Some(Role::Admin),
            _ => None,
        });
    };

    view! {
        <form class="create-account" on:submit=submit>
            <h2>"Create account"</h2>
            <label>
                "Name"
                <input prop:value=name on:input:target=move |ev| name.set(ev.target().value())/>
            </label>
            <label>
                "Surname"
                <input
                    prop:value=surname
                    on:input:target=move |ev| surname.set(ev.target().value())
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    prop:value=email
                    on:input:target=move |ev| email.set(ev.target().value())
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    prop:value=password
                    on:input:target=move |ev| password.set(ev.target().value())
                />
            </label>
            <label>
                "Role"
                <select on:change:target=move |ev| set_role(ev.target().value())>
                    <option value="">"Choose a role"</option>
                    <option value="reader">"Reader"</option>
                    <option value="approver">"Approver"</option>
                    <option value="admin">"Admin"</option>
                </select>
            </label>
            <button type="submit" disabled=move || directory.with(|d| d.loading)>
                "Create"
            </button>
            {move || created.get().map(|m| view! { <p class="form-success">{m}</p> })}
            {move || local_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || {
                directory.with(|d| d.error.clone()).map(|error| {
                    // Field errors arrive newline-separated; one line each.
                    let lines: Vec<_> = error
                        .lines()
                        .map(|line| view! { <p class="form-error">{line.to_owned()}</p> })
                        .collect();
                    lines
                })
            }}
        </form>
    }
}
