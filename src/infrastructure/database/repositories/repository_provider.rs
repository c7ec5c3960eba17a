//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::admin::AdminRepository;
use crate::domain::customer::CustomerRepository;
use crate::domain::platform::PlatformRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::RoomRepository;
use crate::domain::room_note::RoomNoteRepository;

use super::admin_repository::SeaOrmAdminRepository;
use super::customer_repository::SeaOrmCustomerRepository;
use super::platform_repository::SeaOrmPlatformRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::room_note_repository::SeaOrmRoomNoteRepository;
use super::room_repository::SeaOrmRoomRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository
/// accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().find_by_number_or_id("101").await?;
/// let res = repos.reservations().find_by_room(room.unwrap().id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    rooms: SeaOrmRoomRepository,
    customers: SeaOrmCustomerRepository,
    platforms: SeaOrmPlatformRepository,
    admins: SeaOrmAdminRepository,
    room_notes: SeaOrmRoomNoteRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rooms: SeaOrmRoomRepository::new(db.clone()),
            customers: SeaOrmCustomerRepository::new(db.clone()),
            platforms: SeaOrmPlatformRepository::new(db.clone()),
            admins: SeaOrmAdminRepository::new(db.clone()),
            room_notes: SeaOrmRoomNoteRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
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
