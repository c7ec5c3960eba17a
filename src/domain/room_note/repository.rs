//! Room note repository interface

use async_trait::async_trait;

use super::model::{NewRoomNote, RoomNote};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomNoteRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<RoomNote>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomNote>>;

    async fn save(&self, note: NewRoomNote) -> DomainResult<RoomNote>;

    /// Update a note's progress. `finished` also marks the note completed
    /// and stamps `completed_at`.
    async fn update_progress(&self, id: i32, progress: &str) -> DomainResult<()>;
}
