//! HTTP interface (axum)

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;

use std::sync::Arc;

use crate::application::BookingService;
use crate::domain::RepositoryProvider;

/// Shared state for all API handlers.
///
/// Built once at startup and injected; handlers never construct their own
/// store connections.
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub booking: Arc<BookingService>,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        let booking = Arc::new(BookingService::new(repos.clone()));
        Self { repos, booking }
    }
}
