//! Authenticated-session model and route guard.
//!
//! The session is an explicit value provided through Leptos context as
//! `RwSignal<SessionState>` — components read it from context instead of
//! reaching for a global. The bearer token travels with the session struct,
//! so every API call site gets it from the same place.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::LoginResponse;

/// Account role; doubles as the top-level route prefix for the role's pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Approver,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Approver => "approver",
            Role::Admin => "admin",
        }
    }

    /// Landing page for the role, used after login and form submissions.
    #[must_use]
    pub fn start_path(self) -> String {
        format!("/{}/start", self.as_str())
    }
}

/// The authenticated user plus the bearer token for API calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self {
            name: resp.name,
            surname: resp.surname,
            email: resp.email,
            role: resp.role,
            token: resp.access_token,
        }
    }
}

/// Login call status plus the session itself, provided via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Session transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionMsg {
    LoginStarted,
    LoginSucceeded(Session),
    LoginFailed(String),
    /// Logout always clears the session, even when the server call failed.
    LoggedOut,
}

impl SessionState {
    pub fn reduce(&mut self, msg: SessionMsg) {
        match msg {
            SessionMsg::LoginStarted => {
                self.loading = true;
                self.error = None;
            }
            SessionMsg::LoginSucceeded(session) => {
                self.session = Some(session);
                self.loading = false;
                self.error = None;
            }
            SessionMsg::LoginFailed(error) => {
                self.loading = false;
                self.error = Some(error);
            }
            SessionMsg::LoggedOut => {
                *self = Self::default();
            }
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// Whether the current session may visit `path`.
///
/// Allowed iff a session exists AND the path is the login page (`/`) or its
/// first segment matches the session's role. No session means no access to
/// anything but the login page.
#[must_use]
pub fn route_allowed(session: Option<&Session>, path: &str) -> bool {
    if path == "/" || path.is_empty() {
        return true;
    }
    let Some(session) = session else {
        return false;
    };
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    first == session.role.as_str()
}

// ── sessionStorage mirror ──
//
// The session survives a reload within the tab. Hydrate-only: there is no
// storage on the server.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "session";

/// Write the session to `sessionStorage`.
#[cfg(feature = "hydrate")]
pub fn persist(session: &Session) {
    let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
        return;
    };
    if let Ok(json) = serde_json::to_string(session) {
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}

/// Read a previously persisted session, if any.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn restore() -> Option<Session> {
    let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
    let json = storage.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

/// Drop the persisted session.
#[cfg(feature = "hydrate")]
pub fn clear_persisted() {
    if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
