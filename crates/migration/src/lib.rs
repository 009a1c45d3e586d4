//! Migrator registering entity migrations in dependency order.
//! `reservation` references `user` and `menu`, so it comes last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user;
mod m20240101_000002_create_menu;
mod m20240101_000003_create_sales_day;
mod m20240101_000004_create_reservation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user::Migration),
            Box::new(m20240101_000002_create_menu::Migration),
            Box::new(m20240101_000003_create_sales_day::Migration),
            Box::new(m20240101_000004_create_reservation::Migration),
        ]
    }
}
