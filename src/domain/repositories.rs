//! Repository provider trait
//!
//! One accessor per aggregate. Backends implement this once and the rest
//! of the system is agnostic to which store is behind it.

use crate::domain::admin::AdminRepository;
use crate::domain::customer::CustomerRepository;
use crate::domain::platform::PlatformRepository;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::RoomRepository;
use crate::domain::room_note::RoomNoteRepository;

pub trait RepositoryProvider: Send + Sync {
    fn rooms(&self) -> &dyn RoomRepository;

    fn customers(&self) -> &dyn CustomerRepository;

    fn platforms(&self) -> &dyn PlatformRepository;

    fn admins(&self) -> &dyn AdminRepository;

    fn room_notes(&self) -> &dyn RoomNoteRepository;

    fn reservations(&self) -> &dyn ReservationRepository;
}
