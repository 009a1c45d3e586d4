use std::sync::Arc;

use models::{menu, reservation, sales_day, user};
use sea_orm::DatabaseConnection;
use service::{Clock, MemoryStore, ResourceService, ResourceStore, SeaOrmStore, SystemClock};

/// Per-entity services handed to the router.
#[derive(Clone)]
pub struct AppState {
    pub users: ResourceService<user::Model>,
    pub menus: ResourceService<menu::Model>,
    pub sales_days: ResourceService<sales_day::Model>,
    pub reservations: ResourceService<reservation::Model>,
}

impl AppState {
    /// All four entities on the shared database pool.
    pub fn with_database(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(SeaOrmStore::new(db));
        let users: Arc<dyn ResourceStore<user::Model>> = store.clone();
        let menus: Arc<dyn ResourceStore<menu::Model>> = store.clone();
        let sales_days: Arc<dyn ResourceStore<sales_day::Model>> = store.clone();
        let reservations: Arc<dyn ResourceStore<reservation::Model>> = store;
        Self::from_stores(users, menus, sales_days, reservations, clock)
    }

    /// Process-local tables; nothing survives a restart.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        Self::from_stores(
            Arc::new(MemoryStore::<user::Model>::new()),
            Arc::new(MemoryStore::<menu::Model>::new()),
            Arc::new(MemoryStore::<sales_day::Model>::new()),
            Arc::new(MemoryStore::<reservation::Model>::new()),
            clock,
        )
    }

    fn from_stores(
        users: Arc<dyn ResourceStore<user::Model>>,
        menus: Arc<dyn ResourceStore<menu::Model>>,
        sales_days: Arc<dyn ResourceStore<sales_day::Model>>,
        reservations: Arc<dyn ResourceStore<reservation::Model>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users: ResourceService::new(users, clock.clone()),
            menus: ResourceService::new(menus, clock.clone()),
            sales_days: ResourceService::new(sales_days, clock.clone()),
            reservations: ResourceService::new(reservations, clock),
        }
    }

    pub fn system_clock() -> Arc<dyn Clock> {
        Arc::new(SystemClock)
    }
}
