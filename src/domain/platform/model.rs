//! Booking platform metadata
//!
//! One row per external booking channel (Airbnb, Agoda, Hotels.com, ...).
//! Reservations reference a platform; the platform record itself is pure
//! metadata.

/// External booking platform
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: i32,
    pub name: String,
    pub api_key: Option<String>,
    pub webhook_url: Option<String>,
}

/// Fields for creating a platform; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPlatform {
    pub name: String,
    pub api_key: Option<String>,
    pub webhook_url: Option<String>,
}
