use super::*;

use crate::session::Role;

// =============================================================
// Deserialization
// =============================================================

#[test]
fn login_response_parses() {
    let body = r#"{
        "name": "Ada", "surname": "Lovelace", "email": "ada@example.com",
        "role": "approver", "access_token": "tok-1"
    }"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.role, Role::Approver);
    assert_eq!(resp.access_token, "tok-1");
}

#[test]
fn room_graphics_parses_rect_lists() {
    let body = r#"{"B-101": [{"x": 10, "y": 20, "width": 100, "height": 80}]}"#;
    let graphics: RoomGraphics = serde_json::from_str(body).unwrap();
    assert_eq!(graphics["B-101"].len(), 1);
    assert_eq!(graphics["B-101"][0].width, 100.0);
}

#[test]
fn room_meta_defaults_optional_fields() {
    let meta: RoomMeta = serde_json::from_str(r#"{"name": "Server room"}"#).unwrap();
    assert!(!meta.access);
    assert!(meta.expires.is_none());
    assert!(meta.approvers.is_empty());
}

#[test]
fn room_meta_keeps_approvers_in_server_order() {
    let body = r#"{
        "name": "Server room",
        "access": true,
        "approvers": ["Grace Hopper", "Ada Lovelace"]
    }"#;
    let meta: RoomMeta = serde_json::from_str(body).unwrap();
    assert_eq!(meta.approvers, ["Grace Hopper", "Ada Lovelace"]);
}

#[test]
fn order_row_uses_type_tag() {
    let body = r#"{"id": "o-1", "type": "ag", "target": "ag-7", "status": "pending"}"#;
    let order: OrderRow = serde_json::from_str(body).unwrap();
    assert_eq!(order.kind, RequestKind::Ag);
    assert!(order.created_at.is_none());
}

#[test]
fn pending_request_defaults_rooms_and_justification() {
    let body = r#"{
        "id": "o-2", "type": "room", "target": "B-101",
        "email": "r@example.com", "name": "R", "surname": "One"
    }"#;
    let req: PendingRequest = serde_json::from_str(body).unwrap();
    assert!(req.rooms.is_empty());
    assert!(req.justification.is_empty());
}

#[test]
fn decision_serializes_type_tag() {
    let decision = Decision {
        request_id: "o-2".to_owned(),
        kind: RequestKind::Room,
        is_access_granted: true,
    };
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["type"], "room");
    assert_eq!(json["is_access_granted"], true);
}

// =============================================================
// Error extraction
// =============================================================

#[test]
fn extract_error_returns_string_verbatim() {
    let body = r#"{"error": "room does not exist"}"#;
    assert_eq!(extract_error(body, "HTTP 400"), "room does not exist");
}

#[test]
fn extract_error_flattens_field_errors() {
    let body = r#"{"error": {"email": ["already taken"], "password": ["too short"]}}"#;
    let msg = extract_error(body, "HTTP 422");
    assert!(msg.contains("email: already taken"));
    assert!(msg.contains("password: too short"));
}

#[test]
fn extract_error_falls_back_on_garbage() {
    assert_eq!(extract_error("<html>502</html>", "HTTP 502"), "HTTP 502");
    assert_eq!(extract_error(r#"{"detail": "x"}"#, "HTTP 500"), "HTTP 500");
    assert_eq!(extract_error(r#"{"error": {}}"#, "HTTP 500"), "HTTP 500");
}
