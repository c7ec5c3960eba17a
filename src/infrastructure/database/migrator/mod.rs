//! Database migrations

use sea_orm_migration::prelude::*;

mod m20250901_000001_create_rooms;
mod m20250901_000002_create_customers;
mod m20250901_000003_create_platforms;
mod m20250901_000004_create_admins;
mod m20250901_000005_create_reservations;
mod m20250901_000006_create_room_notes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_rooms::Migration),
            Box::new(m20250901_000002_create_customers::Migration),
            Box::new(m20250901_000003_create_platforms::Migration),
            Box::new(m20250901_000004_create_admins::Migration),
            Box::new(m20250901_000005_create_reservations::Migration),
            Box::new(m20250901_000006_create_room_notes::Migration),
        ]
    }
}
