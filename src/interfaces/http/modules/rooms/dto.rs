//! Room DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::room::Room;

/// Room details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    pub max_guests: i32,
    pub price_per_night: f64,
    /// available, occupied, cleaning or maintenance
    pub status: String,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            room_number: r.room_number,
            room_type: r.room_type,
            max_guests: r.max_guests,
            price_per_night: r.price_per_night,
            status: r.status.as_str().to_string(),
        }
    }
}

/// Request to create a room
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub room_number: String,
    #[validate(length(min = 1, message = "is required"))]
    pub room_type: String,
    #[validate(range(min = 1, message = "at least one guest"))]
    pub max_guests: i32,
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub price_per_night: f64,
}
