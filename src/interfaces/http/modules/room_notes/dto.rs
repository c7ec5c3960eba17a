//! Room note DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::room_note::RoomNote;

/// Staff note in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomNoteDto {
    pub id: i32,
    /// Room number the note is attached to
    pub room_id: String,
    pub admin_id: i32,
    /// urgent or after_checkout
    pub note_type: String,
    pub title: String,
    pub description: String,
    /// pending or completed
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub reservation_id: Option<i32>,
    /// confirm, In progress, finished
    pub progress: Option<String>,
}

impl From<RoomNote> for RoomNoteDto {
    fn from(n: RoomNote) -> Self {
        Self {
            id: n.id,
            room_id: n.room_id,
            admin_id: n.admin_id,
            note_type: n.note_type.as_str().to_string(),
            title: n.title,
            description: n.description,
            status: n.status,
            created_at: n.created_at,
            completed_at: n.completed_at,
            reservation_id: n.reservation_id,
            progress: n.progress,
        }
    }
}

/// Request to create a staff note
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomNoteRequest {
    /// Room number or numeric room ID
    #[validate(length(min = 1, message = "is required"))]
    pub room_id: String,
    /// Admin ID or admin display name
    #[validate(length(min = 1, message = "is required"))]
    pub admin_id: String,
    /// urgent or after_checkout
    #[validate(length(min = 1, message = "is required"))]
    pub note_type: String,
    #[validate(length(min = 1, message = "is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "is required"))]
    pub description: String,
    pub reservation_id: Option<i32>,
    /// confirm, In progress, finished
    pub progress: Option<String>,
}

/// Note listing filters
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ListNotesParams {
    /// Filter by room number
    pub room_id: Option<String>,
    /// Filter by progress value; an empty string selects notes with no
    /// progress set
    pub progress: Option<String>,
}

/// Target progress for the progress-update endpoint
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ProgressParams {
    /// confirm, In progress or finished
    pub progress: String,
}
