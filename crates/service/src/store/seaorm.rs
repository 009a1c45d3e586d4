use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};
use tracing::warn;

use models::{menu, reservation, sales_day, user};

use super::{ResourceStore, StoreError};
use crate::resources::DateRange;

/// SeaORM-backed store shared by all four entities.
///
/// Holds the process-wide connection pool; cloning shares the pool.
#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn log_vanished(entity: &str, key: impl std::fmt::Display) {
    warn!(%entity, %key, "update matched no row; row vanished after the existence check");
}

#[async_trait]
impl ResourceStore<user::Model> for SeaOrmStore {
    async fn select_all(&self, _filter: &()) -> Result<Vec<user::Model>, StoreError> {
        Ok(user::Entity::find().order_by_asc(user::Column::UserId).all(&self.db).await?)
    }

    async fn select_one(&self, key: &i32) -> Result<user::Model, StoreError> {
        user::Entity::find_by_id(*key).one(&self.db).await?.ok_or(StoreError::NotFound)
    }

    async fn insert(&self, row: user::Model) -> Result<user::Model, StoreError> {
        let am = user::ActiveModel {
            user_id: NotSet,
            user_name: Set(row.user_name),
            user_tel: Set(row.user_tel),
            user_email: Set(row.user_email),
            created: Set(row.created),
            updated: Set(row.updated),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, row: user::Model) -> Result<(), StoreError> {
        let key = row.user_id;
        let am = user::ActiveModel {
            user_id: NotSet,
            user_name: Set(row.user_name),
            user_tel: Set(row.user_tel),
            user_email: Set(row.user_email),
            created: Set(row.created),
            updated: Set(row.updated),
        };
        let res = user::Entity::update_many()
            .set(am)
            .filter(user::Column::UserId.eq(key))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            log_vanished("user", key);
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceStore<menu::Model> for SeaOrmStore {
    async fn select_all(&self, _filter: &()) -> Result<Vec<menu::Model>, StoreError> {
        Ok(menu::Entity::find().order_by_asc(menu::Column::MenuId).all(&self.db).await?)
    }

    async fn select_one(&self, key: &i32) -> Result<menu::Model, StoreError> {
        menu::Entity::find_by_id(*key).one(&self.db).await?.ok_or(StoreError::NotFound)
    }

    async fn insert(&self, row: menu::Model) -> Result<menu::Model, StoreError> {
        let am = menu::ActiveModel {
            menu_id: NotSet,
            menu_name: Set(row.menu_name),
            created: Set(row.created),
            updated: Set(row.updated),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, row: menu::Model) -> Result<(), StoreError> {
        let key = row.menu_id;
        let am = menu::ActiveModel {
            menu_id: NotSet,
            menu_name: Set(row.menu_name),
            created: Set(row.created),
            updated: Set(row.updated),
        };
        let res = menu::Entity::update_many()
            .set(am)
            .filter(menu::Column::MenuId.eq(key))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            log_vanished("menu", key);
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceStore<sales_day::Model> for SeaOrmStore {
    async fn select_all(&self, _filter: &()) -> Result<Vec<sales_day::Model>, StoreError> {
        Ok(sales_day::Entity::find()
            .order_by_asc(sales_day::Column::SalesDay)
            .all(&self.db)
            .await?)
    }

    async fn select_one(&self, key: &String) -> Result<sales_day::Model, StoreError> {
        sales_day::Entity::find_by_id(key.clone())
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, row: sales_day::Model) -> Result<sales_day::Model, StoreError> {
        // The key is caller supplied; a duplicate date fails on the primary key.
        let am = sales_day::ActiveModel {
            sales_day: Set(row.sales_day),
            start_time: Set(row.start_time),
            end_time: Set(row.end_time),
            holiday: Set(row.holiday),
            created: Set(row.created),
            updated: Set(row.updated),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, row: sales_day::Model) -> Result<(), StoreError> {
        let key = row.sales_day;
        let am = sales_day::ActiveModel {
            sales_day: NotSet,
            start_time: Set(row.start_time),
            end_time: Set(row.end_time),
            holiday: Set(row.holiday),
            created: Set(row.created),
            updated: Set(row.updated),
        };
        let res = sales_day::Entity::update_many()
            .set(am)
            .filter(sales_day::Column::SalesDay.eq(key.as_str()))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            log_vanished("sales_day", &key);
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceStore<reservation::Model> for SeaOrmStore {
    async fn select_all(&self, filter: &DateRange) -> Result<Vec<reservation::Model>, StoreError> {
        Ok(reservation::Entity::find()
            .filter(reservation::Column::ReservationDatetime.between(filter.from, filter.to))
            .order_by_asc(reservation::Column::ReservationDatetime)
            .order_by_asc(reservation::Column::ReservationId)
            .all(&self.db)
            .await?)
    }

    async fn select_one(&self, key: &i32) -> Result<reservation::Model, StoreError> {
        reservation::Entity::find_by_id(*key)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, row: reservation::Model) -> Result<reservation::Model, StoreError> {
        let am = reservation::ActiveModel {
            reservation_id: NotSet,
            user_id: Set(row.user_id),
            menu_id: Set(row.menu_id),
            reservation_datetime: Set(row.reservation_datetime),
            created: Set(row.created),
            updated: Set(row.updated),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, row: reservation::Model) -> Result<(), StoreError> {
        let key = row.reservation_id;
        let am = reservation::ActiveModel {
            reservation_id: NotSet,
            user_id: Set(row.user_id),
            menu_id: Set(row.menu_id),
            reservation_datetime: Set(row.reservation_datetime),
            created: Set(row.created),
            updated: Set(row.updated),
        };
        let res = reservation::Entity::update_many()
            .set(am)
            .filter(reservation::Column::ReservationId.eq(key))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            log_vanished("reservation", key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::{Duration, TimeZone, Utc};
    use sea_orm::prelude::DateTimeWithTimeZone;
    use uuid::Uuid;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTimeWithTimeZone {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap().into()
    }

    #[tokio::test]
    async fn reservation_range_and_update_against_postgres() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let store = SeaOrmStore::new(db.clone());
        let now: DateTimeWithTimeZone = Utc::now().into();

        let u = ResourceStore::<user::Model>::insert(&store, user::Model {
            user_id: 0,
            user_name: format!("store_user_{}", Uuid::new_v4()),
            user_tel: "000-0000".into(),
            user_email: "store@example.com".into(),
            created: now,
            updated: now,
        })
        .await?;
        let m = ResourceStore::<menu::Model>::insert(&store, menu::Model {
            menu_id: 0,
            menu_name: "Cut".into(),
            created: now,
            updated: now,
        })
        .await?;
        assert!(u.user_id > 0 && m.menu_id > 0);

        // a year nobody else books, so the window only sees this test's rows
        let year = 2100 + (u.user_id % 500);
        let slots = [
            ts(year, 3, 1, 23, 59, 59),
            ts(year, 3, 2, 0, 0, 0),
            ts(year, 3, 2, 23, 59, 59),
            ts(year, 3, 2, 9, 0, 0),
            ts(year, 3, 3, 0, 0, 0),
        ];
        let mut ids = vec![];
        for at in slots {
            let r = ResourceStore::<reservation::Model>::insert(&store, reservation::Model {
                reservation_id: 0,
                user_id: u.user_id,
                menu_id: m.menu_id,
                reservation_datetime: at,
                created: now,
                updated: now,
            })
            .await?;
            ids.push(r.reservation_id);
        }

        let range = DateRange { from: ts(year, 3, 2, 0, 0, 0), to: ts(year, 3, 2, 23, 59, 59) };
        let rows = ResourceStore::<reservation::Model>::select_all(&store, &range).await?;
        let got: Vec<i32> = rows.iter().map(|r| r.reservation_id).collect();
        assert_eq!(got, vec![ids[1], ids[3], ids[2]]);

        let mut moved = rows[0].clone();
        moved.reservation_datetime = moved.reservation_datetime + Duration::hours(1);
        moved.updated = now + Duration::seconds(1);
        ResourceStore::<reservation::Model>::update(&store, moved.clone()).await?;
        let stored =
            ResourceStore::<reservation::Model>::select_one(&store, &moved.reservation_id).await?;
        assert_eq!(stored.reservation_datetime, moved.reservation_datetime);

        // cleanup
        reservation::Entity::delete_many()
            .filter(reservation::Column::UserId.eq(u.user_id))
            .exec(&db)
            .await?;
        user::Entity::delete_by_id(u.user_id).exec(&db).await?;
        menu::Entity::delete_by_id(m.menu_id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_sales_day_is_a_constraint_error() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let store = SeaOrmStore::new(db.clone());
        let now: DateTimeWithTimeZone = Utc::now().into();
        let day = sales_day::Model {
            sales_day: format!("2{:03}-01-01", Uuid::new_v4().as_u128() % 1000),
            start_time: "09:00".into(),
            end_time: "18:00".into(),
            holiday: false,
            created: now,
            updated: now,
        };
        let _ = sales_day::Entity::delete_by_id(day.sales_day.clone()).exec(&db).await;

        ResourceStore::<sales_day::Model>::insert(&store, day.clone()).await?;
        let dup = ResourceStore::<sales_day::Model>::insert(&store, day.clone()).await;
        assert!(matches!(dup, Err(StoreError::Constraint(_))));

        sales_day::Entity::delete_by_id(day.sales_day).exec(&db).await?;
        Ok(())
    }
}
