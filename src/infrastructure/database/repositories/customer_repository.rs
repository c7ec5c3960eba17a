//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use crate::domain::customer::{Customer, CustomerRepository, NewCustomer};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::customer;

use super::db_err;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: customer::Model) -> Customer {
    Customer {
        id: m.id,
        name: m.name,
        email: m.email.filter(|s| !s.trim().is_empty()),
        phone: m.phone.filter(|s| !s.trim().is_empty()),
        nationality: m.nationality.filter(|s| !s.trim().is_empty()),
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_asc(customer::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, new: NewCustomer) -> DomainResult<Customer> {
        debug!("Saving customer: {}", new.name);

        let model = customer::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            email: Set(new.email),
            phone: Set(new.phone),
            nationality: Set(new.nationality),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }
}
