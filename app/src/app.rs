//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{admin::AdminPage, approver::ApproverPage, login::LoginPage, reader::ReaderPage};
use crate::session::SessionState;
use crate::state::{directory::DirectoryState, rooms::RoomsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and state-slice contexts and sets up client-side
/// routing. Role pages take a wildcard segment and dispatch on it
/// themselves, so `/reader/requests/form` and friends stay one route each.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let rooms = RwSignal::new(RoomsState::default());
    let directory = RwSignal::new(DirectoryState::default());

    // A reload within the tab keeps the user signed in.
    #[cfg(feature = "hydrate")]
    if let Some(restored) = crate::session::restore() {
        session.update(|s| s.reduce(crate::session::SessionMsg::LoginSucceeded(restored)));
    }

    provide_context(session);
    provide_context(rooms);
    provide_context(directory);

    view! {
        <Stylesheet id="leptos" href="/pkg/app.css"/>
        <Title text="Access Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=(StaticSegment("reader"), WildcardSegment("rest")) view=ReaderPage/>
                <Route path=(StaticSegment("approver"), WildcardSegment("rest")) view=ApproverPage/>
                <Route path=(StaticSegment("admin"), WildcardSegment("rest")) view=AdminPage/>
            </Routes>
        </Router>
    }
}
