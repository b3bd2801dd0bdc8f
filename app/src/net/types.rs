//! Wire types shared between the API client and the state slices.
//!
//! The server wraps list payloads in envelopes with named fields
//! (`access_groups`, `orders`, ...) and reports failures as a JSON body with
//! an `error` field. [`extract_error`] pulls that field out so pages can show
//! the server's message verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// `POST /login` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: Role,
    pub access_token: String,
}

/// One rectangle of a room, as stored on the server.
///
/// Mirrors `floorplan::plan::RectGeom`; duplicated here so the state slices
/// compile without the (hydrate-only) engine crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectGeom {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Room id -> rectangles, the map blob from `GET /reader/map`.
pub type RoomGraphics = HashMap<String, Vec<RectGeom>>;

/// Per-room access metadata for the current viewer (`GET /reader/access`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMeta {
    pub name: String,
    #[serde(default)]
    pub access: bool,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub warn_date: Option<String>,
    #[serde(default)]
    pub ag_id: Option<String>,
    #[serde(default)]
    pub approvers: Vec<String>,
}

/// An access group a reader can request as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGroup {
    pub id: String,
    pub name: String,
}

/// A user in directory listings (readers, approvers, room occupants).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// What a request targets: a single room or an access group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Room,
    Ag,
}

/// One row of the reader's own request history (`GET /reader/orders`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    /// Room id or access-group id, depending on `kind`.
    pub target: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A request awaiting an approver's decision (`GET /approver/orders`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub target: String,
    /// Rooms covered by the request, for map highlighting on hover.
    #[serde(default)]
    pub rooms: Vec<String>,
    pub email: String,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub justification: String,
}

/// `POST /approver/access` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub request_id: String,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub is_access_granted: bool,
}

/// One grant held by a reader (`GET /approver/access_for_reader/{email}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderAccess {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub id: String,
    pub name: String,
}

/// Extract the server's error message from a failure body.
///
/// `{"error": "no such room"}` yields the string verbatim. Account-creation
/// failures nest per-field messages (`{"error": {"email": ["taken"]}}`);
/// those are flattened to `field: message` lines. Anything else falls back
/// to the supplied status text.
#[must_use]
pub fn extract_error(body: &str, fallback: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback.to_owned();
    };
    match value.get("error") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(serde_json::Value::Object(fields)) => {
            let mut lines: Vec<String> = Vec::new();
            for (field, messages) in fields {
                match messages {
                    serde_json::Value::Array(items) => {
                        for item in items {
                            if let serde_json::Value::String(msg) = item {
                                lines.push(format!("{field}: {msg}"));
                            }
                        }
                    }
                    serde_json::Value::String(msg) => lines.push(format!("{field}: {msg}")),
                    _ => {}
                }
            }
            if lines.is_empty() {
                fallback.to_owned()
            } else {
                lines.join("\n")
            }
        }
        _ => fallback.to_owned(),
    }
}
