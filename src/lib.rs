//! # Namsan Hotel Back-Office
//!
//! Back-office API for a small hotel: rooms, customers, reservations,
//! booking-platform metadata, staff notes and admins, consolidated from
//! multiple booking channels into one administrative front end.
//!
//! ## Architecture
//!
//! - **domain**: Core entities, repository traits and the date/status
//!   normalization rules
//! - **application**: The reservation lifecycle and overlap detection
//! - **infrastructure**: Storage backends (SeaORM/SQLite and in-memory)
//! - **interfaces**: REST API (axum) with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};

// Re-export API router and state
pub use interfaces::http::{create_api_router, ApiState};

// Re-export the booking core
pub use application::{BookingRequest, BookingService};
