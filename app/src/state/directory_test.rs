use super::*;

use crate::net::types::RequestKind;

fn user(email: &str) -> UserRow {
    UserRow { name: "A".to_owned(), surname: "B".to_owned(), email: email.to_owned() }
}

fn request(id: &str) -> PendingRequest {
    PendingRequest {
        id: id.to_owned(),
        kind: RequestKind::Room,
        target: "B-101".to_owned(),
        rooms: vec!["B-101".to_owned()],
        email: "r@example.com".to_owned(),
        name: "R".to_owned(),
        surname: "One".to_owned(),
        justification: "maintenance".to_owned(),
    }
}

fn grant(id: &str) -> ReaderAccess {
    ReaderAccess { kind: RequestKind::Room, id: id.to_owned(), name: format!("Room {id}") }
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn started_sets_loading_and_clears_error() {
    let mut state = DirectoryState { error: Some("old".to_owned()), ..DirectoryState::default() };
    state.reduce(DirectoryMsg::Started(DirectoryOp::PendingRequests));
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn loads_land_in_their_own_fields() {
    let mut state = DirectoryState::default();
    state.reduce(DirectoryMsg::ReadersLoaded(vec![user("r@x")]));
    state.reduce(DirectoryMsg::ApproversLoaded(vec![user("a@x"), user("b@x")]));
    state.reduce(DirectoryMsg::UsersLoaded(vec![user("r@x"), user("a@x"), user("b@x")]));
    state.reduce(DirectoryMsg::PendingLoaded(vec![request("o-1")]));
    assert_eq!(state.readers.len(), 1);
    assert_eq!(state.approvers.len(), 2);
    assert_eq!(state.users.len(), 3);
    assert_eq!(state.pending_requests.len(), 1);
    assert!(!state.loading);
}

#[test]
fn failed_keeps_prior_data() {
    let mut state = DirectoryState::default();
    state.reduce(DirectoryMsg::PendingLoaded(vec![request("o-1")]));
    state.reduce(DirectoryMsg::Started(DirectoryOp::Decision));
    state.reduce(DirectoryMsg::Failed("forbidden".to_owned()));
    assert_eq!(state.error.as_deref(), Some("forbidden"));
    assert_eq!(state.pending_requests.len(), 1);
    assert!(!state.loading);
}

#[test]
fn mutated_only_clears_loading() {
    let mut state = DirectoryState { loading: true, ..DirectoryState::default() };
    state.reduce(DirectoryMsg::Mutated);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selecting_a_user_drops_stale_grants() {
    let mut state = DirectoryState::default();
    state.reduce(DirectoryMsg::SelectUser(Some(user("r@x"))));
    state.reduce(DirectoryMsg::ReaderAccessLoaded(vec![grant("B-101")]));
    assert_eq!(state.reader_access.len(), 1);
    state.reduce(DirectoryMsg::SelectUser(Some(user("s@x"))));
    assert!(state.reader_access.is_empty());
    assert_eq!(state.selected_user.as_ref().map(|u| u.email.as_str()), Some("s@x"));
}

#[test]
fn deselecting_user_also_clears_grants() {
    let mut state = DirectoryState::default();
    state.reduce(DirectoryMsg::SelectUser(Some(user("r@x"))));
    state.reduce(DirectoryMsg::ReaderAccessLoaded(vec![grant("B-101")]));
    state.reduce(DirectoryMsg::SelectUser(None));
    assert!(state.selected_user.is_none());
    assert!(state.reader_access.is_empty());
}

#[test]
fn select_request_round_trip() {
    let mut state = DirectoryState::default();
    state.reduce(DirectoryMsg::SelectRequest(Some(request("o-1"))));
    assert_eq!(state.selected_request.as_ref().map(|r| r.id.as_str()), Some("o-1"));
    state.reduce(DirectoryMsg::SelectRequest(None));
    assert!(state.selected_request.is_none());
}

#[test]
fn clear_room_readers_empties_only_that_list() {
    let mut state = DirectoryState::default();
    state.reduce(DirectoryMsg::RoomReadersLoaded(vec![user("r@x")]));
    state.reduce(DirectoryMsg::ReadersLoaded(vec![user("a@x")]));
    state.reduce(DirectoryMsg::ClearRoomReaders);
    assert!(state.users_with_access.is_empty());
    assert_eq!(state.readers.len(), 1);
}

#[test]
fn reset_restores_initial_value() {
    let mut state = DirectoryState::default();
    state.reduce(DirectoryMsg::PendingLoaded(vec![request("o-1")]));
    state.reduce(DirectoryMsg::SelectUser(Some(user("r@x"))));
    state.reduce(DirectoryMsg::Failed("x".to_owned()));
    state.reduce(DirectoryMsg::Reset);
    assert_eq!(state, DirectoryState::default());
}
