//! Room note domain entity
//!
//! Staff notes attached to a room: urgent issues and after-checkout tasks.
//! Notes reference the room by its human-facing number, not the numeric id;
//! housekeeping staff work from room numbers.

use chrono::{DateTime, Utc};

/// Note kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteType {
    /// Needs attention now
    Urgent,
    /// Task to perform once the guest has checked out
    AfterCheckout,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::AfterCheckout => "after_checkout",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "urgent" => Some(Self::Urgent),
            "after_checkout" => Some(Self::AfterCheckout),
            _ => None,
        }
    }
}

impl std::fmt::Display for NoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Staff note on a room
#[derive(Debug, Clone)]
pub struct RoomNote {
    pub id: i32,
    /// Room number the note is attached to
    pub room_id: String,
    /// Admin who created the note
    pub admin_id: i32,
    pub note_type: NoteType,
    pub title: String,
    pub description: String,
    /// pending or completed; completed is set when progress reaches
    /// `finished`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Reservation the task came out of, for after-checkout work
    pub reservation_id: Option<i32>,
    /// confirm, In progress, finished
    pub progress: Option<String>,
}

/// Fields for creating a note; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRoomNote {
    pub room_id: String,
    pub admin_id: i32,
    pub note_type: NoteType,
    pub title: String,
    pub description: String,
    pub reservation_id: Option<i32>,
    pub progress: Option<String>,
}

/// Progress values accepted by the progress-update endpoint.
pub const PROGRESS_VALUES: &[&str] = &["confirm", "In progress", "finished"];
