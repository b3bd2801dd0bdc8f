//! Map-facing state: room graphics, access metadata, access groups,
//! highlights, and the current selection.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::net::types::{AccessGroup, RoomGraphics, RoomMeta};

/// Everything the map pages read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomsState {
    pub room_graphics: RoomGraphics,
    /// Per-room access metadata for the viewer, keyed by room id.
    pub room_data: HashMap<String, RoomMeta>,
    /// Room ids that exist in the database; gates rectangle creation.
    pub legal_room_ids: Vec<String>,
    pub access_groups: Vec<AccessGroup>,
    pub highlighted_rooms: Vec<String>,
    /// Rooms the approver answers for (approver map tint).
    pub responsibilities: Vec<String>,
    pub selected_room: Option<String>,
    pub selected_rect: Option<Uuid>,
    pub selected_ag: Option<AccessGroup>,
    /// Whether the request form targets the selected access group rather
    /// than the selected room.
    pub ag_selected: bool,
    pub loading: bool,
    pub error: Option<String>,
}

/// Which fetch or mutation a [`RoomsMsg::Started`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomsOp {
    Map,
    Access,
    AccessGroups,
    RoomsInAg,
    LegalRooms,
    Responsibilities,
    SaveMap,
    SubmitRequest,
}

/// Transitions for [`RoomsState`].
#[derive(Clone, Debug, PartialEq)]
pub enum RoomsMsg {
    Started(RoomsOp),
    MapLoaded(RoomGraphics),
    AccessLoaded(HashMap<String, RoomMeta>),
    AccessGroupsLoaded(Vec<AccessGroup>),
    /// Rooms of the chosen access group; they become the highlight set.
    RoomsInAgLoaded(Vec<String>),
    LegalRoomsLoaded(Vec<String>),
    ResponsibilitiesLoaded(Vec<String>),
    /// A mutation (map save, request submission) completed.
    Saved,
    Failed(String),
    SelectRoom(Option<String>),
    SelectRect(Option<Uuid>),
    SelectAccessGroup(Option<AccessGroup>),
    HighlightRooms(Vec<String>),
    /// The map editor rewrote the graphics locally.
    SetRoomGraphics(RoomGraphics),
    AgSelected(bool),
    Reset,
}

impl RoomsState {
    pub fn reduce(&mut self, msg: RoomsMsg) {
        match msg {
            RoomsMsg::Started(_) => {
                self.loading = true;
                self.error = None;
            }
            RoomsMsg::MapLoaded(graphics) => {
                self.room_graphics = graphics;
                self.loading = false;
            }
            RoomsMsg::AccessLoaded(data) => {
                self.room_data = data;
                self.loading = false;
            }
            RoomsMsg::AccessGroupsLoaded(groups) => {
                self.access_groups = groups;
                self.loading = false;
            }
            RoomsMsg::RoomsInAgLoaded(rooms) => {
                self.highlighted_rooms = rooms;
                self.loading = false;
            }
            RoomsMsg::LegalRoomsLoaded(ids) => {
                self.legal_room_ids = ids;
                self.loading = false;
            }
            RoomsMsg::ResponsibilitiesLoaded(rooms) => {
                self.responsibilities = rooms;
                self.loading = false;
            }
            RoomsMsg::Saved => {
                self.loading = false;
            }
            RoomsMsg::Failed(error) => {
                self.loading = false;
                self.error = Some(error);
            }
            RoomsMsg::SelectRoom(room) => {
                self.selected_room = room;
            }
            RoomsMsg::SelectRect(rect) => {
                self.selected_rect = rect;
            }
            RoomsMsg::SelectAccessGroup(ag) => {
                self.selected_ag = ag;
            }
            RoomsMsg::HighlightRooms(rooms) => {
                self.highlighted_rooms = rooms;
            }
            RoomsMsg::SetRoomGraphics(graphics) => {
                self.room_graphics = graphics;
            }
            RoomsMsg::AgSelected(flag) => {
                self.ag_selected = flag;
            }
            RoomsMsg::Reset => {
                *self = Self::default();
            }
        }
    }

    /// Metadata for the currently selected room, if both exist.
    #[must_use]
    pub fn selected_room_data(&self) -> Option<&RoomMeta> {
        self.selected_room.as_ref().and_then(|id| self.room_data.get(id))
    }
}
