//! Fill derivation for room rectangles.
//!
//! View mode paints each rectangle by the viewer's relationship to the room,
//! highest-priority rule first. Edit mode only distinguishes the selected
//! room.

#[cfg(test)]
#[path = "paint_test.rs"]
mod paint_test;

/// Everything the fill rules need to know about one rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectFlags {
    /// The rectangle's room is the selected room.
    pub selected_room: bool,
    /// The room is in the highlight set (AG preview, pending-request hover).
    pub highlighted: bool,
    /// The viewer's access to the room expires soon.
    pub expiring: bool,
    /// The viewer has access to the room.
    pub has_access: bool,
    /// The viewer is a responsible approver for the room.
    pub responsible: bool,
}

/// View-mode fill, ordered by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Selected room.
    Active,
    /// Highlighted room.
    Highlight,
    /// Access expiring soon.
    Warning,
    /// Viewer has access.
    Granted,
    /// Viewer is a responsible approver.
    Responsible,
    /// None of the above.
    Neutral,
}

impl Fill {
    /// Derive the fill for one rectangle; the first matching rule wins.
    #[must_use]
    pub fn derive(flags: RectFlags) -> Self {
        if flags.selected_room {
            Self::Active
        } else if flags.highlighted {
            Self::Highlight
        } else if flags.expiring {
            Self::Warning
        } else if flags.has_access {
            Self::Granted
        } else if flags.responsible {
            Self::Responsible
        } else {
            Self::Neutral
        }
    }

    /// The CSS color for this fill.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Active => "blue",
            Self::Highlight => "lightblue",
            Self::Warning => "yellow",
            Self::Granted => "green",
            Self::Responsible => "lightgreen",
            Self::Neutral => "grey",
        }
    }
}

/// Edit-mode fill: rectangles of the selected room turn red.
#[must_use]
pub fn edit_fill(in_selected_room: bool) -> &'static str {
    if in_selected_room { "red" } else { "blue" }
}
