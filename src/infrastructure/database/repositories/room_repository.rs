//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::room::{NewRoom, Room, RoomRepository, RoomStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::room;

use super::db_err;

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        room_number: m.room_number,
        room_type: m.room_type,
        max_guests: m.max_guests,
        price_per_night: m.price_per_night,
        status: RoomStatus::normalize(&m.status),
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .order_by_asc(room::Column::RoomNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_number_or_id(&self, key: &str) -> DomainResult<Option<Room>> {
        // Room number takes precedence; a purely numeric key may still be
        // a room number, so the id lookup is only a fallback
        let by_number = room::Entity::find()
            .filter(room::Column::RoomNumber.eq(key))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if let Some(model) = by_number {
            return Ok(Some(model_to_domain(model)));
        }

        if let Ok(id) = key.parse::<i32>() {
            return self.find_by_id(id).await;
        }
        Ok(None)
    }

    async fn save(&self, new: NewRoom) -> DomainResult<Room> {
        debug!("Saving room: {}", new.room_number);

        let model = room::ActiveModel {
            id: NotSet,
            room_number: Set(new.room_number),
            room_type: Set(new.room_type),
            max_guests: Set(new.max_guests),
            price_per_night: Set(new.price_per_night),
            status: Set(new.status.as_str().to_string()),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn update_status(&self, id: i32, status: RoomStatus) -> DomainResult<()> {
        let existing = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Room", "id", id));
        };

        let mut active: room::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
