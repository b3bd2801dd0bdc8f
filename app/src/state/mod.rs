//! Shared client-side state slices.
//!
//! DESIGN
//! ======
//! Each slice is a plain struct plus a message enum and a pure
//! `reduce(&mut self, msg)` with an exhaustive match, so transitions are
//! testable without a browser. Components hold the slices as
//! `RwSignal<_>` context values and apply messages with
//! `signal.update(|s| s.reduce(msg))`.
//!
//! Fetch lifecycles follow one contract: `Started` sets `loading`, a
//! `*Loaded` message merges its payload and clears `loading`, `Failed`
//! stores the error string and clears `loading` without touching data, and
//! `Reset` restores the initial value. Responses are folded in whenever they
//! arrive; the last write wins.

pub mod directory;
pub mod rooms;
