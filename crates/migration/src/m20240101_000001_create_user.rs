//! Create `user` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::UserId))
                    .col(string_len(User::UserName, 128).not_null())
                    .col(string_len(User::UserTel, 32).not_null())
                    .col(string_len(User::UserEmail, 255).not_null())
                    .col(timestamp_with_time_zone(User::Created).not_null())
                    .col(timestamp_with_time_zone(User::Updated).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    UserId,
    UserName,
    UserTel,
    UserEmail,
    Created,
    Updated,
}
