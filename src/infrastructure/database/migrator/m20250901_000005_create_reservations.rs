//! Create reservations table
//!
//! Stores room reservations with their lifecycle status. The overlap
//! check scans this table per room, so room_id and status are indexed.

use sea_orm_migration::prelude::*;

use super::m20250901_000001_create_rooms::Rooms;
use super::m20250901_000002_create_customers::Customers;
use super::m20250901_000003_create_platforms::BookingPlatforms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Reservations::RoomId).integer().not_null())
                    .col(ColumnDef::new(Reservations::PlatformId).integer().not_null())
                    .col(ColumnDef::new(Reservations::CheckIn).date().not_null())
                    .col(ColumnDef::new(Reservations::CheckOut).date().not_null())
                    .col(ColumnDef::new(Reservations::Guests).integer().not_null())
                    .col(ColumnDef::new(Reservations::TotalPrice).double().not_null())
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("Reserved"),
                    )
                    .col(
                        ColumnDef::new(Reservations::BookingReference)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::Notes).string())
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_room")
                            .from(Reservations::Table, Reservations::RoomId)
                            .to(Rooms::Table, Rooms::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_customer")
                            .from(Reservations::Table, Reservations::CustomerId)
                            .to(Customers::Table, Customers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_platform")
                            .from(Reservations::Table, Reservations::PlatformId)
                            .to(BookingPlatforms::Table, BookingPlatforms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_room")
                    .table(Reservations::Table)
                    .col(Reservations::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_status")
                    .table(Reservations::Table)
                    .col(Reservations::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    CustomerId,
    RoomId,
    PlatformId,
    CheckIn,
    CheckOut,
    Guests,
    TotalPrice,
    Status,
    BookingReference,
    Notes,
    CreatedAt,
}
