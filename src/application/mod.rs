pub mod services;

pub use services::{BookingRequest, BookingService};
