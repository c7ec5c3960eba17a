//! Room repository interface

use async_trait::async_trait;

use super::model::{NewRoom, Room, RoomStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// List all rooms
    async fn find_all(&self) -> DomainResult<Vec<Room>>;

    /// Find a room by numeric ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    /// Find a room by its human-facing number first, falling back to the
    /// numeric ID when the key parses as one
    async fn find_by_number_or_id(&self, key: &str) -> DomainResult<Option<Room>>;

    /// Create a new room; the store assigns the id
    async fn save(&self, room: NewRoom) -> DomainResult<Room>;

    /// Overwrite a room's status
    async fn update_status(&self, id: i32, status: RoomStatus) -> DomainResult<()>;
}
