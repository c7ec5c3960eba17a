//! SeaORM implementation of AdminRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::admin::{Admin, AdminRepository, NewAdmin};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::admin;

use super::db_err;

pub struct SeaOrmAdminRepository {
    db: DatabaseConnection,
}

impl SeaOrmAdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: admin::Model) -> Admin {
    Admin {
        id: m.id,
        name: m.name,
        email: m.email.filter(|s| !s.trim().is_empty()),
        phone: m.phone.filter(|s| !s.trim().is_empty()),
        role: m.role.filter(|s| !s.trim().is_empty()),
        is_active: m.is_active,
    }
}

#[async_trait]
impl AdminRepository for SeaOrmAdminRepository {
    async fn find_all(&self) -> DomainResult<Vec<Admin>> {
        let models = admin::Entity::find()
            .order_by_asc(admin::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Admin>> {
        let model = admin::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Admin>> {
        let model = admin::Entity::find()
            .filter(admin::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, new: NewAdmin) -> DomainResult<Admin> {
        debug!("Saving admin: {}", new.name);

        let model = admin::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            email: Set(new.email),
            phone: Set(new.phone),
            role: Set(new.role),
            is_active: Set(true),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let existing = admin::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Admin", "id", id));
        };

        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
