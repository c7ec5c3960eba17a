//! Booking platform repository interface

use async_trait::async_trait;

use super::model::{NewPlatform, Platform};
use crate::domain::DomainResult;

#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Platform>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Platform>>;

    async fn save(&self, platform: NewPlatform) -> DomainResult<Platform>;
}
