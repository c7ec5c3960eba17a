//! SeaORM implementation of RoomNoteRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set,
};

use crate::domain::room_note::{NewRoomNote, NoteType, RoomNote, RoomNoteRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::room_note;

use super::db_err;

pub struct SeaOrmRoomNoteRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomNoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: room_note::Model) -> RoomNote {
    RoomNote {
        id: m.id,
        room_id: m.room_id,
        admin_id: m.admin_id,
        // Historical rows only ever carried these two values
        note_type: NoteType::parse(&m.note_type).unwrap_or(NoteType::Urgent),
        title: m.title,
        description: m.description,
        status: m.status,
        created_at: m.created_at,
        completed_at: m.completed_at,
        reservation_id: m.reservation_id,
        progress: m.progress.filter(|p| !p.trim().is_empty()),
    }
}

#[async_trait]
impl RoomNoteRepository for SeaOrmRoomNoteRepository {
    async fn find_all(&self) -> DomainResult<Vec<RoomNote>> {
        let models = room_note::Entity::find()
            .order_by_desc(room_note::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomNote>> {
        let model = room_note::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, new: NewRoomNote) -> DomainResult<RoomNote> {
        debug!("Saving room note for room {}", new.room_id);

        let model = room_note::ActiveModel {
            id: NotSet,
            room_id: Set(new.room_id),
            admin_id: Set(new.admin_id),
            note_type: Set(new.note_type.as_str().to_string()),
            title: Set(new.title),
            description: Set(new.description),
            status: Set("pending".to_string()),
            created_at: Set(Utc::now()),
            completed_at: Set(None),
            reservation_id: Set(new.reservation_id),
            progress: Set(new.progress),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn update_progress(&self, id: i32, progress: &str) -> DomainResult<()> {
        let existing = room_note::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("RoomNote", "id", id));
        };

        let mut active: room_note::ActiveModel = existing.into();
        active.progress = Set(Some(progress.to_string()));
        if progress == "finished" {
            active.status = Set("completed".to_string());
            active.completed_at = Set(Some(Utc::now()));
        }
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
