pub mod admin;
pub mod customer;
pub mod platform;
pub mod reservation;
pub mod room;
pub mod room_note;
