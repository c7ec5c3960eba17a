//! Reservation lifecycle and overlap detection
//!
//! The one piece of this system with real invariants: a room can never
//! hold two active reservations with intersecting date ranges, and every
//! reservation status change projects a status onto its room.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::domain::reservation::{NewReservation, Reservation, ReservationStatus};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Booking request, already normalized at the HTTP boundary.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub customer_id: i32,
    pub room_id: i32,
    pub platform_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_price: f64,
    pub booking_reference: String,
    pub notes: Option<String>,
    /// Defaults to `Reserved` when absent
    pub status: Option<ReservationStatus>,
}

/// Owns the reservation status state machine and the coupled room-status
/// writes.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    /// Serializes overlap-check + insert so two concurrent bookings for
    /// the same dates cannot both pass the check. Process-local only; a
    /// multi-instance deployment needs a store-level constraint instead.
    booking_lock: tokio::sync::Mutex<()>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            booking_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Whether any reservation on `room_id` intersects the given range.
    ///
    /// Linear scan over the room's reservations; volume per room is
    /// bounded by calendar-year occupancy, so there is nothing to gain
    /// from an interval tree here. Pure query, no side effects.
    pub async fn has_conflict(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_id: Option<i32>,
    ) -> DomainResult<bool> {
        let reservations = self.repos.reservations().find_by_room(room_id).await?;
        Ok(reservations
            .iter()
            .filter(|r| exclude_id != Some(r.id))
            .any(|r| r.overlaps(check_in, check_out)))
    }

    /// Inverse of [`Self::has_conflict`], for the availability endpoint.
    pub async fn is_available(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<bool> {
        Ok(!self.has_conflict(room_id, check_in, check_out, None).await?)
    }

    /// Create a reservation after passing the overlap check, then mark the
    /// room occupied.
    ///
    /// The reservation insert and the room status write are two separate
    /// store writes with no cross-entity transaction; a crash between them
    /// leaves the room status stale. Accepted limitation.
    pub async fn create_reservation(&self, req: BookingRequest) -> DomainResult<Reservation> {
        if req.booking_reference.trim().is_empty() {
            return Err(DomainError::Validation(
                "booking_reference is required".to_string(),
            ));
        }
        if req.check_in >= req.check_out {
            return Err(DomainError::Validation(
                "check_out must be after check_in".to_string(),
            ));
        }

        let room = self
            .repos
            .rooms()
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", "id", req.room_id))?;

        let _guard = self.booking_lock.lock().await;

        if self
            .has_conflict(req.room_id, req.check_in, req.check_out, None)
            .await?
        {
            return Err(DomainError::Conflict(
                "Room is already booked for the selected dates".to_string(),
            ));
        }

        let status = req.status.unwrap_or(ReservationStatus::Reserved);
        let reservation = self
            .repos
            .reservations()
            .save(NewReservation {
                customer_id: req.customer_id,
                room_id: req.room_id,
                platform_id: req.platform_id,
                check_in: req.check_in,
                check_out: req.check_out,
                guests: req.guests,
                total_price: req.total_price,
                status,
                booking_reference: req.booking_reference,
                notes: req.notes,
                created_at: Utc::now(),
            })
            .await?;

        self.repos
            .rooms()
            .update_status(room.id, status.room_status())
            .await?;

        info!(
            reservation_id = reservation.id,
            room = %room.room_number,
            check_in = %reservation.check_in,
            check_out = %reservation.check_out,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Move a reservation to `new_status` and project the matching status
    /// onto its room.
    pub async fn set_status(
        &self,
        reservation_id: i32,
        new_status: ReservationStatus,
    ) -> DomainResult<Reservation> {
        let reservation = self
            .repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", "id", reservation_id))?;

        self.repos
            .reservations()
            .update_status(reservation_id, new_status)
            .await?;

        self.repos
            .rooms()
            .update_status(reservation.room_id, new_status.room_status())
            .await?;

        info!(
            reservation_id,
            status = %new_status,
            room_id = reservation.room_id,
            "reservation status updated"
        );

        // Re-read so the caller sees exactly what the store now holds
        self.repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", "id", reservation_id))
    }

    /// Check a guest in. Fails if they already are.
    pub async fn check_in(&self, reservation_id: i32) -> DomainResult<Reservation> {
        let reservation = self
            .repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", "id", reservation_id))?;

        if reservation.status == ReservationStatus::CheckedIn {
            return Err(DomainError::AlreadyInState(
                "Already checked in".to_string(),
            ));
        }

        self.set_status(reservation_id, ReservationStatus::CheckedIn)
            .await
    }

    /// Check a guest out. Fails if they already are.
    pub async fn check_out(&self, reservation_id: i32) -> DomainResult<Reservation> {
        let reservation = self
            .repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", "id", reservation_id))?;

        if reservation.status == ReservationStatus::CheckedOut {
            return Err(DomainError::AlreadyInState(
                "Already checked out".to_string(),
            ));
        }

        self.set_status(reservation_id, ReservationStatus::CheckedOut)
            .await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::room::{NewRoom, RoomStatus};
    use crate::infrastructure::memory::InMemoryRepositoryProvider;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn service_with_room() -> (BookingService, Arc<InMemoryRepositoryProvider>, i32) {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let room = repos
            .rooms()
            .save(NewRoom {
                room_number: "101".to_string(),
                room_type: "Standard".to_string(),
                max_guests: 2,
                price_per_night: 90.0,
                status: RoomStatus::Available,
            })
            .await
            .unwrap();
        let service = BookingService::new(repos.clone());
        (service, repos, room.id)
    }

    fn booking(room_id: i32, check_in: NaiveDate, check_out: NaiveDate) -> BookingRequest {
        BookingRequest {
            customer_id: 1,
            room_id,
            platform_id: 1,
            check_in,
            check_out,
            guests: 2,
            total_price: 450.0,
            booking_reference: "BK-1001".to_string(),
            notes: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn create_defaults_to_reserved_and_occupies_room() {
        let (service, repos, room_id) = service_with_room().await;

        let r = service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();

        assert_eq!(r.status, ReservationStatus::Reserved);
        let room = repos.rooms().find_by_id(room_id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
    }

    #[tokio::test]
    async fn overlapping_booking_is_rejected() {
        let (service, _repos, room_id) = service_with_room().await;

        service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();

        let err = service
            .create_reservation(booking(room_id, date(2026, 1, 12), date(2026, 1, 20)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn adjacent_booking_succeeds() {
        let (service, _repos, room_id) = service_with_room().await;

        service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();

        // Non-overlapping, one day after the existing checkout
        let r = service
            .create_reservation(booking(room_id, date(2026, 1, 16), date(2026, 1, 18)))
            .await
            .unwrap();
        assert_eq!(r.check_in, date(2026, 1, 16));
    }

    #[tokio::test]
    async fn touching_checkout_day_conflicts() {
        let (service, _repos, room_id) = service_with_room().await;

        service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();

        let err = service
            .create_reservation(booking(room_id, date(2026, 1, 15), date(2026, 1, 18)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn conflict_check_can_exclude_a_reservation() {
        let (service, _repos, room_id) = service_with_room().await;

        let r = service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();

        // The reservation does not conflict with itself once excluded
        assert!(!service
            .has_conflict(room_id, date(2026, 1, 10), date(2026, 1, 15), Some(r.id))
            .await
            .unwrap());
        assert!(service
            .has_conflict(room_id, date(2026, 1, 10), date(2026, 1, 15), None)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn missing_booking_reference_is_rejected() {
        let (service, _repos, room_id) = service_with_room().await;

        let mut req = booking(room_id, date(2026, 1, 10), date(2026, 1, 15));
        req.booking_reference = "  ".to_string();
        let err = service.create_reservation(req).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn inverted_date_range_is_rejected() {
        let (service, _repos, room_id) = service_with_room().await;

        let err = service
            .create_reservation(booking(room_id, date(2026, 1, 15), date(2026, 1, 10)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_room_is_rejected() {
        let (service, _repos, _room_id) = service_with_room().await;

        let err = service
            .create_reservation(booking(999, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn status_round_trip_updates_room() {
        let (service, repos, room_id) = service_with_room().await;

        let r = service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();

        let r = service
            .set_status(r.id, ReservationStatus::CheckedIn)
            .await
            .unwrap();
        assert_eq!(r.status, ReservationStatus::CheckedIn);
        let room = repos.rooms().find_by_id(room_id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);

        let r = service
            .set_status(r.id, ReservationStatus::CheckedOut)
            .await
            .unwrap();
        assert_eq!(r.status, ReservationStatus::CheckedOut);
        let room = repos.rooms().find_by_id(room_id).await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Cleaning);
    }

    #[tokio::test]
    async fn set_status_on_unknown_reservation_fails() {
        let (service, _repos, _room_id) = service_with_room().await;

        let err = service
            .set_status(42, ReservationStatus::CheckedIn)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn double_check_in_is_guarded() {
        let (service, _repos, room_id) = service_with_room().await;

        let r = service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();

        service.check_in(r.id).await.unwrap();
        let err = service.check_in(r.id).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyInState(_)));

        // State unchanged by the failed second call
        let again = service.check_out(r.id).await.unwrap();
        assert_eq!(again.status, ReservationStatus::CheckedOut);
    }

    #[tokio::test]
    async fn double_check_out_is_guarded() {
        let (service, _repos, room_id) = service_with_room().await;

        let r = service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();

        service.check_out(r.id).await.unwrap();
        let err = service.check_out(r.id).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyInState(_)));
    }

    #[tokio::test]
    async fn different_rooms_never_conflict() {
        let (service, repos, room_id) = service_with_room().await;
        let other = repos
            .rooms()
            .save(NewRoom {
                room_number: "102".to_string(),
                room_type: "Standard".to_string(),
                max_guests: 2,
                price_per_night: 90.0,
                status: RoomStatus::Available,
            })
            .await
            .unwrap();

        service
            .create_reservation(booking(room_id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();
        let r = service
            .create_reservation(booking(other.id, date(2026, 1, 10), date(2026, 1, 15)))
            .await
            .unwrap();
        assert_eq!(r.room_id, other.id);
    }
}
