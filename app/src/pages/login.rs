//! Login page: email/password form with remember-me.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::session::{Session, SessionMsg, SessionState};

/// Login page.
///
/// An already-authenticated visitor is forwarded to their role's landing
/// page. A failed login shows the server's error message verbatim.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if let Some(saved) = remembered_email() {
        email.set(saved);
        remember.set(true);
    }

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if let Some(role) = session.with(|s| s.session.as_ref().map(|x| x.role)) {
                navigate(&role.start_path(), Default::default());
            }
        });
    }

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let remember_value = remember.get_untracked();
        session.update(|s| s.reduce(SessionMsg::LoginStarted));
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(resp) => {
                    let new_session = Session::from(resp);
                    #[cfg(feature = "hydrate")]
                    {
                        crate::session::persist(&new_session);
                        if remember_value {
                            remember_email(&email_value);
                        } else {
                            forget_email();
                        }
                    }
                    #[cfg(not(feature = "hydrate"))]
                    let _ = remember_value;
                    let start = new_session.role.start_path();
                    session.update(|s| s.reduce(SessionMsg::LoginSucceeded(new_session)));
                    navigate(&start, Default::default());
                }
                Err(error) => {
                    session.update(|s| s.reduce(SessionMsg::LoginFailed(error)));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Access Manager"</h1>
            <form on:submit=submit>
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
                    <input
                        type="checkbox"
                        prop:checked=remember
                        on:change:target=move |ev| remember.set(ev.target().checked())
                    />
                    "Remember me"
                </label>
                <button type="submit" disabled=move || session.with(|s| s.loading)>
                    "Sign in"
                </button>
            </form>
            {move || {
                session.with(|s| s.error.clone()).map(|error| {
                    view! { <p class="form-error">{error}</p> }
                })
            }}
        </div>
    }
}

// ── remember-me ──

#[cfg(feature = "hydrate")]
const REMEMBER_KEY: &str = "remembered_email";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn remembered_email() -> Option<String> {
    local_storage()?.get_item(REMEMBER_KEY).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn remember_email(email: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REMEMBER_KEY, email);
    }
}

#[cfg(feature = "hydrate")]
fn forget_email() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(REMEMBER_KEY);
    }
}
