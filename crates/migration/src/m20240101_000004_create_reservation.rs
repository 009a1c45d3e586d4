//! Create `reservation` table with FKs to `user` and `menu`.
//!
//! No uniqueness on `reservation_datetime`: overlapping reservations are allowed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::ReservationId))
                    .col(integer(Reservation::UserId).not_null())
                    .col(integer(Reservation::MenuId).not_null())
                    .col(timestamp_with_time_zone(Reservation::ReservationDatetime).not_null())
                    .col(timestamp_with_time_zone(Reservation::Created).not_null())
                    .col(timestamp_with_time_zone(Reservation::Updated).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_menu")
                            .from(Reservation::Table, Reservation::MenuId)
                            .to(Menu::Table, Menu::MenuId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Range scans by day are the hot read path
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_datetime")
                    .table(Reservation::Table)
                    .col(Reservation::ReservationDatetime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reservation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reservation {
    Table,
    ReservationId,
    UserId,
    MenuId,
    ReservationDatetime,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum User {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Menu {
    Table,
    MenuId,
}
