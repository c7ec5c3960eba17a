pub mod admins;
pub mod calendar;
pub mod checkinout;
pub mod cleaning;
pub mod customers;
pub mod health;
pub mod platforms;
pub mod reservations;
pub mod room_notes;
pub mod rooms;
