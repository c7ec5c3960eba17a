//! Booking platform entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_platforms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Airbnb, Agoda, Hotels.com, ...
    pub name: String,

    #[sea_orm(nullable)]
    pub api_key: Option<String>,

    #[sea_orm(nullable)]
    pub webhook_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
