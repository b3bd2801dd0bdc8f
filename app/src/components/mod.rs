//! Reusable UI components shared by the role pages.

pub mod ag_search;
pub mod answering_request;
pub mod approver_search;
pub mod create_account;
pub mod create_ag;
pub mod header;
pub mod lockdown;
pub mod manage_accounts;
pub mod map_host;
pub mod pending_requests;
pub mod request_form;
pub mod requests_table;
pub mod revoke_form;
pub mod room_search;
pub mod user_search;
