pub mod admin_repository;
pub mod customer_repository;
pub mod platform_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod room_note_repository;
pub mod room_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}
