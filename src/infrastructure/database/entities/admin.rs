//! Admin entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    /// manager, staff, ...
    #[sea_orm(nullable)]
    pub role: Option<String>,

    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_note::Entity")]
    RoomNotes,
}

impl Related<super::room_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomNotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
