//! Room note entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room_notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Room number, not the numeric room id
    pub room_id: String,

    pub admin_id: i32,

    /// urgent or after_checkout
    pub note_type: String,

    pub title: String,
    pub description: String,

    /// pending or completed
    pub status: String,

    pub created_at: DateTimeUtc,

    #[sea_orm(nullable)]
    pub completed_at: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub reservation_id: Option<i32>,

    /// confirm, In progress, finished
    #[sea_orm(nullable)]
    pub progress: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin::Entity",
        from = "Column::AdminId",
        to = "super::admin::Column::Id"
    )]
    Admin,
}

impl Related<super::admin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
