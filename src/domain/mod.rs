pub mod admin;
pub mod customer;
pub mod date;
pub mod error;
pub mod platform;
pub mod repositories;
pub mod reservation;
pub mod room;
pub mod room_note;

// Re-export commonly used types
pub use admin::{Admin, NewAdmin};
pub use customer::{Customer, NewCustomer};
pub use date::parse_date;
pub use error::{DomainError, DomainResult};
pub use platform::{NewPlatform, Platform};
pub use repositories::RepositoryProvider;
pub use reservation::{NewReservation, Reservation, ReservationStatus};
pub use room::{NewRoom, Room, RoomStatus};
pub use room_note::{NewRoomNote, NoteType, RoomNote};
