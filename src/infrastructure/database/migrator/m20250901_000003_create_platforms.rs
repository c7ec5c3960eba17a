//! Create booking_platforms table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingPlatforms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookingPlatforms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BookingPlatforms::Name).string().not_null())
                    .col(ColumnDef::new(BookingPlatforms::ApiKey).string())
                    .col(ColumnDef::new(BookingPlatforms::WebhookUrl).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingPlatforms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BookingPlatforms {
    Table,
    Id,
    Name,
    ApiKey,
    WebhookUrl,
}
