//! Create `sales_day` table.
//!
//! Keyed by the calendar date itself (`YYYY-MM-DD`), no surrogate id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesDay::Table)
                    .if_not_exists()
                    .col(string_len(SalesDay::SalesDay, 10).not_null().primary_key())
                    .col(string_len(SalesDay::StartTime, 5).not_null())
                    .col(string_len(SalesDay::EndTime, 5).not_null())
                    .col(boolean(SalesDay::Holiday).not_null())
                    .col(timestamp_with_time_zone(SalesDay::Created).not_null())
                    .col(timestamp_with_time_zone(SalesDay::Updated).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SalesDay::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SalesDay {
    Table,
    SalesDay,
    StartTime,
    EndTime,
    Holiday,
    Created,
    Updated,
}
