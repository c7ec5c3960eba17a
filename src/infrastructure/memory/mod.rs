//! In-memory repository backend
//!
//! Keeps every record in process memory with the same external contract
//! as the relational backend. Used for development without a database
//! file and as the test backend. Records here are already typed, so the
//! raw-value normalization the relational backend performs on read is a
//! no-op in this one.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::admin::{Admin, AdminRepository, NewAdmin};
use crate::domain::customer::{Customer, CustomerRepository, NewCustomer};
use crate::domain::platform::{NewPlatform, Platform, PlatformRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::{
    NewReservation, Reservation, ReservationRepository, ReservationStatus,
};
use crate::domain::room::{NewRoom, Room, RoomRepository, RoomStatus};
use crate::domain::room_note::{NewRoomNote, RoomNote, RoomNoteRepository};
use crate::domain::{DomainError, DomainResult};

// ── Rooms ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryRoomRepository {
    rooms: DashMap<i32, Room>,
    counter: AtomicI32,
}

#[async_trait]
impl RoomRepository for MemoryRoomRepository {
    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self.rooms.iter().map(|e| e.value().clone()).collect();
        rooms.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(rooms)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        Ok(self.rooms.get(&id).map(|r| r.clone()))
    }

    async fn find_by_number_or_id(&self, key: &str) -> DomainResult<Option<Room>> {
        let by_number = self
            .rooms
            .iter()
            .find(|e| e.value().room_number == key)
            .map(|e| e.value().clone());
        if by_number.is_some() {
            return Ok(by_number);
        }
        if let Ok(id) = key.parse::<i32>() {
            return Ok(self.rooms.get(&id).map(|r| r.clone()));
        }
        Ok(None)
    }

    async fn save(&self, new: NewRoom) -> DomainResult<Room> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let room = Room {
            id,
            room_number: new.room_number,
            room_type: new.room_type,
            max_guests: new.max_guests,
            price_per_night: new.price_per_night,
            status: new.status,
        };
        self.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn update_status(&self, id: i32, status: RoomStatus) -> DomainResult<()> {
        if let Some(mut room) = self.rooms.get_mut(&id) {
            room.status = status;
            Ok(())
        } else {
            Err(DomainError::not_found("Room", "id", id))
        }
    }
}

// ── Customers ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryCustomerRepository {
    customers: DashMap<i32, Customer>,
    counter: AtomicI32,
}

#[async_trait]
impl CustomerRepository for MemoryCustomerRepository {
    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let mut all: Vec<Customer> = self.customers.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Customer>> {
        Ok(self.customers.get(&id).map(|c| c.clone()))
    }

    async fn save(&self, new: NewCustomer) -> DomainResult<Customer> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let customer = Customer {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            nationality: new.nationality,
        };
        self.customers.insert(id, customer.clone());
        Ok(customer)
    }
}

// ── Platforms ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryPlatformRepository {
    platforms: DashMap<i32, Platform>,
    counter: AtomicI32,
}

#[async_trait]
impl PlatformRepository for MemoryPlatformRepository {
    async fn find_all(&self) -> DomainResult<Vec<Platform>> {
        let mut all: Vec<Platform> = self.platforms.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Platform>> {
        Ok(self.platforms.get(&id).map(|p| p.clone()))
    }

    async fn save(&self, new: NewPlatform) -> DomainResult<Platform> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let platform = Platform {
            id,
            name: new.name,
            api_key: new.api_key,
            webhook_url: new.webhook_url,
        };
        self.platforms.insert(id, platform.clone());
        Ok(platform)
    }
}

// ── Admins ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryAdminRepository {
    admins: DashMap<i32, Admin>,
    counter: AtomicI32,
}

#[async_trait]
impl AdminRepository for MemoryAdminRepository {
    async fn find_all(&self) -> DomainResult<Vec<Admin>> {
        let mut all: Vec<Admin> = self.admins.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Admin>> {
        Ok(self.admins.get(&id).map(|a| a.clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Admin>> {
        Ok(self
            .admins
            .iter()
            .find(|e| e.value().name == name)
            .map(|e| e.value().clone()))
    }

    async fn save(&self, new: NewAdmin) -> DomainResult<Admin> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let admin = Admin {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            role: new.role,
            is_active: true,
        };
        self.admins.insert(id, admin.clone());
        Ok(admin)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.admins
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("Admin", "id", id))?;
        Ok(())
    }
}

// ── Room notes ─────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryRoomNoteRepository {
    notes: DashMap<i32, RoomNote>,
    counter: AtomicI32,
}

#[async_trait]
impl RoomNoteRepository for MemoryRoomNoteRepository {
    async fn find_all(&self) -> DomainResult<Vec<RoomNote>> {
        let mut all: Vec<RoomNote> = self.notes.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomNote>> {
        Ok(self.notes.get(&id).map(|n| n.clone()))
    }

    async fn save(&self, new: NewRoomNote) -> DomainResult<RoomNote> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let note = RoomNote {
            id,
            room_id: new.room_id,
            admin_id: new.admin_id,
            note_type: new.note_type,
            title: new.title,
            description: new.description,
            status: "pending".to_string(),
            created_at: Utc::now(),
            completed_at: None,
            reservation_id: new.reservation_id,
            progress: new.progress,
        };
        self.notes.insert(id, note.clone());
        Ok(note)
    }

    async fn update_progress(&self, id: i32, progress: &str) -> DomainResult<()> {
        if let Some(mut note) = self.notes.get_mut(&id) {
            note.progress = Some(progress.to_string());
            if progress == "finished" {
                note.status = "completed".to_string();
                note.completed_at = Some(Utc::now());
            }
            Ok(())
        } else {
            Err(DomainError::not_found("RoomNote", "id", id))
        }
    }
}

// ── Reservations ───────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryReservationRepository {
    reservations: DashMap<i32, Reservation>,
    counter: AtomicI32,
}

#[async_trait]
impl ReservationRepository for MemoryReservationRepository {
    async fn save(&self, new: NewReservation) -> DomainResult<Reservation> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let reservation = Reservation {
            id,
            customer_id: new.customer_id,
            room_id: new.room_id,
            platform_id: new.platform_id,
            check_in: new.check_in,
            check_out: new.check_out,
            guests: new.guests,
            total_price: new.total_price,
            status: new.status,
            booking_reference: new.booking_reference,
            notes: new.notes,
            created_at: new.created_at,
        };
        self.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let mut all: Vec<Reservation> =
            self.reservations.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(all)
    }

    async fn find_by_room(&self, room_id: i32) -> DomainResult<Vec<Reservation>> {
        // Typed records cannot carry the raw cancelled marker, so no
        // status filter is needed here
        let mut all: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|e| e.value().room_id == room_id)
            .map(|e| e.value().clone())
            .collect();
        all.sort_by(|a, b| a.check_in.cmp(&b.check_in));
        Ok(all)
    }

    async fn update_status(&self, id: i32, status: ReservationStatus) -> DomainResult<()> {
        if let Some(mut r) = self.reservations.get_mut(&id) {
            r.status = status;
            Ok(())
        } else {
            Err(DomainError::not_found("Reservation", "id", id))
        }
    }
}

// ── Provider ───────────────────────────────────────────────────

/// In-memory repository provider for development and testing
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    rooms: MemoryRoomRepository,
    customers: MemoryCustomerRepository,
    platforms: MemoryPlatformRepository,
    admins: MemoryAdminRepository,
    room_notes: MemoryRoomNoteRepository,
    reservations: MemoryReservationRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn platforms(&self) -> &dyn PlatformRepository {
        &self.platforms
    }

    fn admins(&self) -> &dyn AdminRepository {
        &self.admins
    }

    fn room_notes(&self) -> &dyn RoomNoteRepository {
        &self.room_notes
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::room_note::NoteType;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn room_lookup_by_number_then_id() {
        let repo = MemoryRoomRepository::default();
        let room = repo
            .save(NewRoom {
                room_number: "201".to_string(),
                room_type: "Deluxe".to_string(),
                max_guests: 3,
                price_per_night: 150.0,
                status: RoomStatus::Available,
            })
            .await
            .unwrap();

        let by_number = repo.find_by_number_or_id("201").await.unwrap().unwrap();
        assert_eq!(by_number.id, room.id);

        let by_id = repo
            .find_by_number_or_id(&room.id.to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id.room_number, "201");

        assert!(repo.find_by_number_or_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn finished_progress_completes_note() {
        let repo = MemoryRoomNoteRepository::default();
        let note = repo
            .save(NewRoomNote {
                room_id: "201".to_string(),
                admin_id: 1,
                note_type: NoteType::AfterCheckout,
                title: "Restock minibar".to_string(),
                description: "Two sodas missing".to_string(),
                reservation_id: None,
                progress: None,
            })
            .await
            .unwrap();
        assert_eq!(note.status, "pending");

        repo.update_progress(note.id, "In progress").await.unwrap();
        let note = repo.find_by_id(note.id).await.unwrap().unwrap();
        assert_eq!(note.status, "pending");
        assert_eq!(note.progress.as_deref(), Some("In progress"));

        repo.update_progress(note.id, "finished").await.unwrap();
        let note = repo.find_by_id(note.id).await.unwrap().unwrap();
        assert_eq!(note.status, "completed");
        assert!(note.completed_at.is_some());
    }

    #[tokio::test]
    async fn reservations_filter_by_room() {
        let repo = MemoryReservationRepository::default();
        let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();

        for (room_id, check_in, check_out) in [(1, 1, 5), (1, 10, 12), (2, 1, 5)] {
            repo.save(NewReservation {
                customer_id: 1,
                room_id,
                platform_id: 1,
                check_in: date(check_in),
                check_out: date(check_out),
                guests: 2,
                total_price: 100.0,
                status: ReservationStatus::Reserved,
                booking_reference: "BK-1".to_string(),
                notes: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        }

        let room1 = repo.find_by_room(1).await.unwrap();
        assert_eq!(room1.len(), 2);
        assert!(room1.windows(2).all(|w| w[0].check_in <= w[1].check_in));
        assert_eq!(repo.find_by_room(2).await.unwrap().len(), 1);
        assert!(repo.find_by_room(3).await.unwrap().is_empty());
    }
}
