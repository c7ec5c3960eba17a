pub mod model;
pub mod repository;

pub use model::{NewReservation, Reservation, ReservationStatus, CANCELLED_MARKER};
pub use repository::ReservationRepository;
