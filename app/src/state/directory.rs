//! People-facing state: user listings, the reader's request history,
//! requests awaiting decisions, and the grants held by a chosen reader.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::net::types::{OrderRow, PendingRequest, ReaderAccess, UserRow};

/// Everything the directory/request pages read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    /// Combined account list for the admin's manage-accounts page.
    pub users: Vec<UserRow>,
    pub readers: Vec<UserRow>,
    pub approvers: Vec<UserRow>,
    /// Readers holding access to the room last queried.
    pub users_with_access: Vec<UserRow>,
    /// The reader's own request history.
    pub orders: Vec<OrderRow>,
    /// Requests awaiting this approver's decision.
    pub pending_requests: Vec<PendingRequest>,
    /// Grants held by `selected_user` (revoke form).
    pub reader_access: Vec<ReaderAccess>,
    pub selected_user: Option<UserRow>,
    pub selected_request: Option<PendingRequest>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Which fetch or mutation a [`DirectoryMsg::Started`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectoryOp {
    Orders,
    PendingRequests,
    Readers,
    Approvers,
    Users,
    RoomReaders,
    ReaderAccess,
    Decision,
    Revoke,
    Account,
}

/// Transitions for [`DirectoryState`].
#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryMsg {
    Started(DirectoryOp),
    OrdersLoaded(Vec<OrderRow>),
    PendingLoaded(Vec<PendingRequest>),
    ReadersLoaded(Vec<UserRow>),
    ApproversLoaded(Vec<UserRow>),
    UsersLoaded(Vec<UserRow>),
    RoomReadersLoaded(Vec<UserRow>),
    ReaderAccessLoaded(Vec<ReaderAccess>),
    /// A mutation (decision, revoke, account change) completed.
    Mutated,
    Failed(String),
    SelectUser(Option<UserRow>),
    SelectRequest(Option<PendingRequest>),
    ClearRoomReaders,
    Reset,
}

impl DirectoryState {
    pub fn reduce(&mut self, msg: DirectoryMsg) {
        match msg {
            DirectoryMsg::Started(_) => {
                self.loading = true;
                self.error = None;
            }
            DirectoryMsg::OrdersLoaded(orders) => {
                self.orders = orders;
                self.loading = false;
            }
            DirectoryMsg::PendingLoaded(requests) => {
                self.pending_requests = requests;
                self.loading = false;
            }
            DirectoryMsg::ReadersLoaded(readers) => {
                self.readers = readers;
                self.loading = false;
            }
            DirectoryMsg::ApproversLoaded(approvers) => {
                self.approvers = approvers;
                self.loading = false;
            }
            DirectoryMsg::UsersLoaded(users) => {
                self.users = users;
                self.loading = false;
            }
            DirectoryMsg::RoomReadersLoaded(users) => {
                self.users_with_access = users;
                self.loading = false;
            }
            DirectoryMsg::ReaderAccessLoaded(access) => {
                self.reader_access = access;
                self.loading = false;
            }
            DirectoryMsg::Mutated => {
                self.loading = false;
            }
            DirectoryMsg::Failed(error) => {
                self.loading = false;
                self.error = Some(error);
            }
            DirectoryMsg::SelectUser(user) => {
                self.selected_user = user;
                // Stale grants from the previously selected user must not
                // show under the new one.
                self.reader_access = Vec::new();
            }
            DirectoryMsg::SelectRequest(request) => {
                self.selected_request = request;
            }
            DirectoryMsg::ClearRoomReaders => {
                self.users_with_access = Vec::new();
            }
            DirectoryMsg::Reset => {
                *self = Self::default();
            }
        }
    }
}
