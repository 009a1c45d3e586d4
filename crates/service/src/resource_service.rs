use std::sync::Arc;

use sea_orm::prelude::DateTimeWithTimeZone;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::errors::ServiceError;
use crate::resources::Resource;
use crate::store::{ResourceStore, StoreError};

/// List / create / update for one entity type.
///
/// Update reads the current row and then writes the replacement with two
/// separate store calls. Two concurrent updates of the same key may
/// interleave; the last write wins.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn ResourceStore<R>>,
    clock: Arc<dyn Clock>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), clock: Arc::clone(&self.clock) }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn ResourceStore<R>>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn now(&self) -> DateTimeWithTimeZone {
        self.clock.now().into()
    }

    pub async fn list(&self, query: R::ListQuery) -> Result<Vec<R>, ServiceError> {
        let filter = R::resolve_filter(query, self.clock.today())?;
        let rows = self
            .store
            .select_all(&filter)
            .await
            .map_err(|source| ServiceError::Query { entity: R::NAME, source })?;
        debug!(entity = R::NAME, count = rows.len(), "listed rows");
        Ok(rows)
    }

    /// Stamp `created`/`updated` and insert. Returns the stored row.
    pub async fn create(&self, input: R::Create) -> Result<R, ServiceError> {
        R::check_create(&input)?;
        let row = R::from_create(input, self.now());
        let stored = self
            .store
            .insert(row)
            .await
            .map_err(|source| ServiceError::Insert { entity: R::NAME, source })?;
        info!(entity = R::NAME, key = %stored.key(), "created row");
        Ok(stored)
    }

    /// Replace an existing row, carrying its `created` forward.
    pub async fn update(&self, input: R::Update) -> Result<R, ServiceError> {
        R::check_update(&input)?;
        let key = R::update_key(&input);
        let existing = match self.store.select_one(&key).await {
            Ok(row) => row,
            Err(StoreError::NotFound) => return Err(ServiceError::not_found(R::KEY_NAME, &key)),
            Err(source) => return Err(ServiceError::Select { entity: R::NAME, source }),
        };

        let row = R::from_update(input, existing.created(), self.now());
        self.store
            .update(row.clone())
            .await
            .map_err(|source| ServiceError::Update { entity: R::NAME, source })?;
        info!(entity = R::NAME, key = %key, "updated row");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::resources::{
        menu::{CreateMenuInput, UpdateMenuInput},
        reservation::{CreateReservationInput, UpdateReservationInput},
        sales_day::SalesDayInput,
        user::UpdateUserInput,
        ReservationQuery, Unfiltered,
    };
    use crate::store::memory::MemoryStore;
    use chrono::{Duration, TimeZone, Utc};
    use models::{menu, reservation, sales_day, user};

    fn start() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    fn service<R: Resource>(clock: &Arc<ManualClock>) -> (Arc<MemoryStore<R>>, ResourceService<R>) {
        let store = Arc::new(MemoryStore::<R>::new());
        let svc = ResourceService::new(
            store.clone() as Arc<dyn ResourceStore<R>>,
            clock.clone() as Arc<dyn Clock>,
        );
        (store, svc)
    }

    fn at(s: &str) -> DateTimeWithTimeZone {
        DateTimeWithTimeZone::parse_from_rfc3339(s).unwrap()
    }

    #[tokio::test]
    async fn create_stamps_created_equal_to_updated() -> Result<(), ServiceError> {
        let clock = Arc::new(ManualClock::new(start()));
        let (_, svc) = service::<menu::Model>(&clock);

        let m = svc.create(CreateMenuInput { menu_name: "Haircut".into() }).await?;
        assert_eq!(m.menu_id, 1);
        assert_eq!(m.created, m.updated);
        assert_eq!(m.created, DateTimeWithTimeZone::from(start()));
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_created_and_moves_updated_forward() -> Result<(), ServiceError> {
        let clock = Arc::new(ManualClock::new(start()));
        let (store, svc) = service::<menu::Model>(&clock);
        let original = svc.create(CreateMenuInput { menu_name: "Cut".into() }).await?;

        clock.advance(Duration::minutes(5));
        svc.update(UpdateMenuInput {
            menu_id: original.menu_id,
            menu_name: "Cut & Wash".into(),
        })
        .await?;

        let stored = store.select_one(&original.menu_id).await.unwrap();
        assert_eq!(stored.menu_name, "Cut & Wash");
        assert_eq!(stored.created, original.created);
        assert!(stored.updated > original.updated);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_key_is_not_found_and_inserts_nothing() {
        let clock = Arc::new(ManualClock::new(start()));
        let (store, svc) = service::<user::Model>(&clock);

        let err = svc
            .update(UpdateUserInput {
                user_id: 999,
                user_name: "Nobody".into(),
                user_tel: "000".into(),
                user_email: "nobody@example.com".into(),
            })
            .await
            .unwrap_err();
        match err {
            ServiceError::NotFound(msg) => assert_eq!(msg, "user_id=999 is not found"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn sales_day_validation_happens_before_any_write() {
        let clock = Arc::new(ManualClock::new(start()));
        let (store, svc) = service::<sales_day::Model>(&clock);

        let err = svc
            .create(SalesDayInput {
                sales_day: "2024/01/01".into(),
                start_time: "09:00".into(),
                end_time: "18:00".into(),
                holiday: false,
            })
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn duplicate_sales_day_surfaces_as_insert_failure() -> Result<(), ServiceError> {
        let clock = Arc::new(ManualClock::new(start()));
        let (_, svc) = service::<sales_day::Model>(&clock);
        let day = SalesDayInput {
            sales_day: "2024-01-01".into(),
            start_time: "09:00".into(),
            end_time: "18:00".into(),
            holiday: false,
        };
        svc.create(day.clone()).await?;
        let err = svc.create(day).await.unwrap_err();
        assert!(matches!(err, ServiceError::Insert { source: StoreError::Constraint(_), .. }));
        Ok(())
    }

    #[tokio::test]
    async fn reservation_list_is_ordered_and_bounded_by_day() -> Result<(), ServiceError> {
        let clock = Arc::new(ManualClock::new(start()));
        let (_, svc) = service::<reservation::Model>(&clock);
        for s in [
            "2024-01-01T23:59:59Z",
            "2024-01-01T00:00:00Z",
            "2023-12-31T23:59:59Z",
            "2024-01-02T00:00:00Z",
            "2024-01-01T12:00:00Z",
            "2024-01-01T12:00:00Z",
        ] {
            svc.create(CreateReservationInput {
                user_id: 1,
                menu_id: 1,
                reservation_datetime: at(s),
            })
            .await?;
        }

        let rows = svc
            .list(ReservationQuery {
                reservation_date_from: Some("2024-01-01".into()),
                reservation_date_to: Some("2024-01-01".into()),
                reservation_date: None,
            })
            .await?;
        let times: Vec<DateTimeWithTimeZone> =
            rows.iter().map(|r| r.reservation_datetime).collect();
        assert_eq!(
            times,
            vec![
                at("2024-01-01T00:00:00Z"),
                at("2024-01-01T12:00:00Z"),
                at("2024-01-01T12:00:00Z"),
                at("2024-01-01T23:59:59Z"),
            ]
        );
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        Ok(())
    }

    #[tokio::test]
    async fn reservation_list_defaults_to_the_coming_week() -> Result<(), ServiceError> {
        let clock = Arc::new(ManualClock::new(start()));
        let (_, svc) = service::<reservation::Model>(&clock);
        for s in [
            "2023-12-31T23:00:00Z",
            "2024-01-01T09:00:00Z",
            "2024-01-07T23:59:59Z",
            "2024-01-08T00:00:00Z",
        ] {
            svc.create(CreateReservationInput {
                user_id: 1,
                menu_id: 2,
                reservation_datetime: at(s),
            })
            .await?;
        }
        let rows = svc.list(ReservationQuery::default()).await?;
        let ids: Vec<i32> = rows.iter().map(|r| r.reservation_id).collect();
        assert_eq!(ids, vec![2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn reservation_update_moves_the_slot() -> Result<(), ServiceError> {
        let clock = Arc::new(ManualClock::new(start()));
        let (store, svc) = service::<reservation::Model>(&clock);
        let r = svc
            .create(CreateReservationInput {
                user_id: 1,
                menu_id: 1,
                reservation_datetime: at("2024-01-03T10:00:00Z"),
            })
            .await?;

        clock.advance(Duration::seconds(1));
        svc.update(UpdateReservationInput {
            reservation_id: r.reservation_id,
            user_id: 2,
            menu_id: 3,
            reservation_datetime: at("2024-01-04T15:30:00Z"),
        })
        .await?;

        let stored = store.select_one(&r.reservation_id).await.unwrap();
        assert_eq!((stored.user_id, stored.menu_id), (2, 3));
        assert_eq!(stored.reservation_datetime, at("2024-01-04T15:30:00Z"));
        assert_eq!(stored.created, r.created);
        assert!(stored.updated > r.updated);
        Ok(())
    }

    #[tokio::test]
    async fn unfiltered_list_returns_rows_by_key() -> Result<(), ServiceError> {
        let clock = Arc::new(ManualClock::new(start()));
        let (_, svc) = service::<menu::Model>(&clock);
        assert!(svc.list(Unfiltered::default()).await?.is_empty());
        for name in ["Cut", "Color", "Perm"] {
            svc.create(CreateMenuInput { menu_name: name.into() }).await?;
        }
        let names: Vec<String> = svc
            .list(Unfiltered::default())
            .await?
            .into_iter()
            .map(|m| m.menu_name)
            .collect();
        assert_eq!(names, vec!["Cut", "Color", "Perm"]);
        Ok(())
    }
}
