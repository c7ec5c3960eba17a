//! Admin repository interface

use async_trait::async_trait;

use super::model::{Admin, NewAdmin};
use crate::domain::DomainResult;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Admin>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Admin>>;

    /// Find an admin by display name; note creation accepts names in
    /// place of ids
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Admin>>;

    async fn save(&self, admin: NewAdmin) -> DomainResult<Admin>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
