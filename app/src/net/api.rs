//! REST client for the access-management server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending the
//! session's bearer token on every authenticated call.
//! Server-side (SSR): stubs returning `Err` since these endpoints are only
//! meaningful in the browser.
//!
//! Failures carry the server's `error` body verbatim (see
//! [`super::types::extract_error`]) so pages can show it unchanged.

#![allow(clippy::unused_async)]

use std::collections::HashMap;

use super::types::{
    AccessGroup, Decision, LoginResponse, OrderRow, PendingRequest, ReaderAccess, RoomGraphics,
    RoomMeta, UserRow,
};
use crate::session::Role;

#[cfg(not(feature = "hydrate"))]
const OFFLINE: &str = "not available on server";

// ── hydrate-only request plumbing ──

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};

    use crate::net::types::extract_error;

    fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {token}"))
    }

    async fn check(resp: Response) -> Result<Response, String> {
        if resp.ok() {
            Ok(resp)
        } else {
            let status = format!("HTTP {}", resp.status());
            let body = resp.text().await.unwrap_or_default();
            Err(extract_error(&body, &status))
        }
    }

    pub async fn get_json<T: serde::de::DeserializeOwned>(
        path: &str,
        token: &str,
    ) -> Result<T, String> {
        let resp = bearer(Request::get(path), token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp).await?.json::<T>().await.map_err(|e| e.to_string())
    }

    pub async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<T, String> {
        let resp = bearer(Request::post(path), token)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp).await?.json::<T>().await.map_err(|e| e.to_string())
    }

    pub async fn post_unit<B: serde::Serialize>(
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<(), String> {
        let resp = bearer(Request::post(path), token)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp).await.map(|_| ())
    }

    pub async fn delete_unit(path: &str, token: &str) -> Result<(), String> {
        let resp = bearer(Request::delete(path), token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp).await.map(|_| ())
    }
}

// ── auth ──

/// `POST /login`.
///
/// # Errors
///
/// Returns the server's error message on a rejected login.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }
        http::post_json("/login", "", &Body { email, password }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(OFFLINE.to_owned())
    }
}

/// `POST /logout`. The session is dropped locally whether or not this call
/// succeeds, so the result is discarded.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = http::post_unit("/logout", token, &serde_json::json!({})).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

// ── reader ──

/// `GET /reader/map` — the room-graphics blob.
pub async fn fetch_map(token: &str) -> Result<RoomGraphics, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/reader/map", token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `GET /reader/access` — per-room access metadata for the viewer.
pub async fn fetch_access(token: &str) -> Result<HashMap<String, RoomMeta>, String> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/reader/access", token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `GET /reader/ag`.
pub async fn fetch_access_groups(token: &str) -> Result<Vec<AccessGroup>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            access_groups: Vec<AccessGroup>,
        }
        http::get_json::<Body>("/reader/ag", token).await.map(|b| b.access_groups)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `GET /reader/rooms_in_ag/{id}` — room ids covered by an access group.
pub async fn fetch_rooms_in_ag(token: &str, ag_id: &str) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            rooms: Vec<String>,
        }
        let path = format!("/reader/rooms_in_ag/{ag_id}");
        http::get_json::<Body>(&path, token).await.map(|b| b.rooms)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, ag_id);
        Err(OFFLINE.to_owned())
    }
}

/// `GET /reader/orders` — the reader's own request history.
pub async fn fetch_orders(token: &str) -> Result<Vec<OrderRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            orders: Vec<OrderRow>,
        }
        http::get_json::<Body>("/reader/orders", token).await.map(|b| b.orders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `POST /reader/room` — request access to a single room.
pub async fn request_room(token: &str, room_id: &str, justification: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            room_id: &'a str,
            justification: &'a str,
        }
        http::post_unit("/reader/room", token, &Body { room_id, justification }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, room_id, justification);
        Err(OFFLINE.to_owned())
    }
}

/// `POST /reader/ag` — request access to an access group.
pub async fn request_ag(token: &str, ag_id: &str, justification: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            ag_id: &'a str,
            justification: &'a str,
        }
        http::post_unit("/reader/ag", token, &Body { ag_id, justification }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, ag_id, justification);
        Err(OFFLINE.to_owned())
    }
}

// ── approver ──

/// `GET /approver/orders` — requests awaiting a decision.
pub async fn fetch_pending_requests(token: &str) -> Result<Vec<PendingRequest>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            orders: Vec<PendingRequest>,
        }
        http::get_json::<Body>("/approver/orders", token).await.map(|b| b.orders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `POST /approver/access` — grant or deny a pending request.
pub async fn send_decision(token: &str, decision: &Decision) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        http::post_unit("/approver/access", token, decision).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, decision);
        Err(OFFLINE.to_owned())
    }
}

/// `GET /approver/responsibilities` — room ids this approver answers for.
pub async fn fetch_responsibilities(token: &str) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            responsibilities: Vec<String>,
        }
        http::get_json::<Body>("/approver/responsibilities", token)
            .await
            .map(|b| b.responsibilities)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `GET /approver/readers`.
pub async fn fetch_approver_readers(token: &str) -> Result<Vec<UserRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            readers: Vec<UserRow>,
        }
        http::get_json::<Body>("/approver/readers", token).await.map(|b| b.readers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `POST /approver/readers_for_room` — who currently holds access to a room.
pub async fn fetch_readers_for_room(token: &str, room_id: &str) -> Result<Vec<UserRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Req<'a> {
            room_id: &'a str,
        }
        #[derive(serde::Deserialize)]
        struct Body {
            readers: Vec<UserRow>,
        }
        http::post_json::<_, Body>("/approver/readers_for_room", token, &Req { room_id })
            .await
            .map(|b| b.readers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, room_id);
        Err(OFFLINE.to_owned())
    }
}

/// `GET /approver/access_for_reader/{email}`.
pub async fn fetch_access_for_reader(token: &str, email: &str) -> Result<Vec<ReaderAccess>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            reader_access: Vec<ReaderAccess>,
        }
        let path = format!("/approver/access_for_reader/{email}");
        http::get_json::<Body>(&path, token).await.map(|b| b.reader_access)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email);
        Err(OFFLINE.to_owned())
    }
}

/// `POST /approver/revoke/room` — take a room grant away from a reader.
pub async fn revoke_room(token: &str, email: &str, room_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            email: &'a str,
            room_id: &'a str,
        }
        http::post_unit("/approver/revoke/room", token, &Body { email, room_id }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email, room_id);
        Err(OFFLINE.to_owned())
    }
}

/// `POST /approver/revoke/ag` — take an access-group grant away.
pub async fn revoke_ag(token: &str, email: &str, ag_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            email: &'a str,
            ag_id: &'a str,
        }
        http::post_unit("/approver/revoke/ag", token, &Body { email, ag_id }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email, ag_id);
        Err(OFFLINE.to_owned())
    }
}

// ── admin ──

/// `GET /admin/rooms` — room ids that exist in the database; gates map edits.
pub async fn fetch_admin_rooms(token: &str) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            rooms: Vec<String>,
        }
        http::get_json::<Body>("/admin/rooms", token).await.map(|b| b.rooms)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `POST /admin/map` — persist the edited room graphics.
pub async fn save_map(token: &str, graphics: &RoomGraphics) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        http::post_unit("/admin/map", token, graphics).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, graphics);
        Err(OFFLINE.to_owned())
    }
}

/// `POST /admin/ag` — create an access group over a set of rooms.
pub async fn create_access_group(token: &str, name: &str, rooms: &[String]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            name: &'a str,
            rooms: &'a [String],
        }
        http::post_unit("/admin/ag", token, &Body { name, rooms }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, name, rooms);
        Err(OFFLINE.to_owned())
    }
}

/// `GET /admin/readers`.
pub async fn fetch_admin_readers(token: &str) -> Result<Vec<UserRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            readers: Vec<UserRow>,
        }
        http::get_json::<Body>("/admin/readers", token).await.map(|b| b.readers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `GET /admin/approvers/`.
pub async fn fetch_admin_approvers(token: &str) -> Result<Vec<UserRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            approvers: Vec<UserRow>,
        }
        http::get_json::<Body>("/admin/approvers/", token).await.map(|b| b.approvers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}

/// `POST /admin/{reader|approver|admin}` — create an account with the role.
pub async fn create_account(
    token: &str,
    role: Role,
    name: &str,
    surname: &str,
    email: &str,
    password: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            name: &'a str,
            surname: &'a str,
            email: &'a str,
            password: &'a str,
        }
        let path = format!("/admin/{}", role.as_str());
        http::post_unit(&path, token, &Body { name, surname, email, password }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, role, name, surname, email, password);
        Err(OFFLINE.to_owned())
    }
}

/// `POST /admin/upgrade_to_approver`.
pub async fn upgrade_to_approver(token: &str, email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            email: &'a str,
        }
        http::post_unit("/admin/upgrade_to_approver", token, &Body { email }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email);
        Err(OFFLINE.to_owned())
    }
}

/// `POST /admin/upgrade_to_admin`.
pub async fn upgrade_to_admin(token: &str, email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            email: &'a str,
        }
        http::post_unit("/admin/upgrade_to_admin", token, &Body { email }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email);
        Err(OFFLINE.to_owned())
    }
}

/// `DELETE /admin/user/{email}` — remove the account entirely.
pub async fn delete_user(token: &str, email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/admin/user/{email}");
        http::delete_unit(&path, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email);
        Err(OFFLINE.to_owned())
    }
}

/// `DELETE /admin/card/{email}` — invalidate the user's key card only.
pub async fn delete_card(token: &str, email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/admin/card/{email}");
        http::delete_unit(&path, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, email);
        Err(OFFLINE.to_owned())
    }
}

/// `POST /admin/lockdown` — toggle building-wide lockdown.
pub async fn set_lockdown(token: &str, enabled: bool) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct Body {
            enabled: bool,
        }
        http::post_unit("/admin/lockdown", token, &Body { enabled }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, enabled);
        Err(OFFLINE.to_owned())
    }
}
