//! Reservation repository interface

use async_trait::async_trait;

use super::model::{NewReservation, Reservation, ReservationStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Create a new reservation; the store assigns the id
    async fn save(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Find all reservations (any status)
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Find all reservations for a room, excluding rows whose raw stored
    /// status is the cancelled marker. This is the candidate set for
    /// overlap checks.
    async fn find_by_room(&self, room_id: i32) -> DomainResult<Vec<Reservation>>;

    /// Overwrite a reservation's status
    async fn update_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()>;
}
