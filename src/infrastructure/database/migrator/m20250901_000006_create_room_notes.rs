//! Create room_notes table

use sea_orm_migration::prelude::*;

use super::m20250901_000004_create_admins::Admins;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomNotes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomNotes::RoomId).string().not_null())
                    .col(ColumnDef::new(RoomNotes::AdminId).integer().not_null())
                    .col(ColumnDef::new(RoomNotes::NoteType).string().not_null())
                    .col(ColumnDef::new(RoomNotes::Title).string().not_null())
                    .col(ColumnDef::new(RoomNotes::Description).string().not_null())
                    .col(
                        ColumnDef::new(RoomNotes::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(RoomNotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RoomNotes::CompletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(RoomNotes::ReservationId).integer())
                    .col(ColumnDef::new(RoomNotes::Progress).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_notes_admin")
                            .from(RoomNotes::Table, RoomNotes::AdminId)
                            .to(Admins::Table, Admins::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_notes_room")
                    .table(RoomNotes::Table)
                    .col(RoomNotes::RoomId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomNotes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RoomNotes {
    Table,
    Id,
    RoomId,
    AdminId,
    NoteType,
    Title,
    Description,
    Status,
    CreatedAt,
    CompletedAt,
    ReservationId,
    Progress,
}
