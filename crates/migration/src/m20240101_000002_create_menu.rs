//! Create `menu` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(pk_auto(Menu::MenuId))
                    .col(string_len(Menu::MenuName, 128).not_null())
                    .col(timestamp_with_time_zone(Menu::Created).not_null())
                    .col(timestamp_with_time_zone(Menu::Updated).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Menu::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Menu {
    Table,
    MenuId,
    MenuName,
    Created,
    Updated,
}
