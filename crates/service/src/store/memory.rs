use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ResourceStore, StoreError};
use crate::resources::Resource;

/// In-process table keyed like the SQL one.
pub struct MemoryStore<R: Resource> {
    inner: RwLock<Table<R>>,
}

struct Table<R: Resource> {
    rows: BTreeMap<R::Key, R>,
    last_id: i32,
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self { inner: RwLock::new(Table { rows: BTreeMap::new(), last_id: 0 }) }
    }
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for MemoryStore<R> {
    async fn select_all(&self, filter: &R::Filter) -> Result<Vec<R>, StoreError> {
        let table = self.inner.read().await;
        let mut rows: Vec<R> = table.rows.values().filter(|r| r.matches(filter)).cloned().collect();
        rows.sort_by(|a, b| a.list_order(b));
        Ok(rows)
    }

    async fn select_one(&self, key: &R::Key) -> Result<R, StoreError> {
        let table = self.inner.read().await;
        table.rows.get(key).cloned().ok_or(StoreError::NotFound)
    }

    async fn insert(&self, mut row: R) -> Result<R, StoreError> {
        let mut table = self.inner.write().await;
        if R::AUTO_KEY {
            table.last_id += 1;
            row.assign_key(table.last_id);
        }
        let key = row.key();
        if table.rows.contains_key(&key) {
            return Err(StoreError::Constraint(format!("duplicate key {}={}", R::KEY_NAME, key)));
        }
        table.rows.insert(key, row.clone());
        Ok(row)
    }

    async fn update(&self, row: R) -> Result<(), StoreError> {
        let mut table = self.inner.write().await;
        if let Some(slot) = table.rows.get_mut(&row.key()) {
            *slot = row;
        }
        Ok(())
    }
}
