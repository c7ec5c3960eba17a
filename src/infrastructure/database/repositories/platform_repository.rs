//! SeaORM implementation of PlatformRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use crate::domain::platform::{NewPlatform, Platform, PlatformRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::platform;

use super::db_err;

pub struct SeaOrmPlatformRepository {
    db: DatabaseConnection,
}

impl SeaOrmPlatformRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: platform::Model) -> Platform {
    Platform {
        id: m.id,
        name: m.name,
        api_key: m.api_key.filter(|s| !s.trim().is_empty()),
        webhook_url: m.webhook_url.filter(|s| !s.trim().is_empty()),
    }
}

#[async_trait]
impl PlatformRepository for SeaOrmPlatformRepository {
    async fn find_all(&self) -> DomainResult<Vec<Platform>> {
        let models = platform::Entity::find()
            .order_by_asc(platform::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Platform>> {
        let model = platform::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, new: NewPlatform) -> DomainResult<Platform> {
        debug!("Saving booking platform: {}", new.name);

        let model = platform::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            api_key: Set(new.api_key),
            webhook_url: Set(new.webhook_url),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }
}
