//! Building-wide lockdown toggle.

use leptos::prelude::*;

use crate::net::api;
use crate::session::SessionState;

/// Two-step lockdown control: arm, then confirm. Disabling goes straight
/// through.
#[component]
pub fn Lockdown() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let engaged = RwSignal::new(false);
    let armed = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let set = move |enabled: bool| {
        let Some(token) = session.with_untracked(|s| s.token().map(str::to_owned)) else {
            return;
        };
        pending.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::set_lockdown(&token, enabled).await {
                Ok(()) => {
                    engaged.set(enabled);
                    armed.set(false);
                }
                Err(e) => error.set(Some(e)),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="lockdown">
            <h2>"Lockdown"</h2>
            <p>
                {move || {
                    if engaged.get() {
                        "Lockdown is active: all card access is suspended."
                    } else {
                        "Lockdown is not active."
                    }
                }}
            </p>
            {move || {
                if engaged.get() {
                    view! {
                        <button disabled=pending on:click=move |_| set(false)>
                            "Lift lockdown"
                        </button>
                    }
                    .into_any()
                } else if armed.get() {
                    view! {
                        <div>
                            <button disabled=pending on:click=move |_| set(true)>
                                "Confirm lockdown"
                            </button>
                            <button on:click=move |_| armed.set(false)>"Cancel"</button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <button on:click=move |_| armed.set(true)>"Engage lockdown"</button>
                    }
                    .into_any()
                }
            }}
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </div>
    }
}
