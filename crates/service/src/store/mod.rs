//! Persistence contract for resources.
//!
//! One `ResourceStore<R>` per entity: select-all by filter, select-one by key,
//! insert, and update-by-key. No operation spans more than one statement, so
//! a select followed by an update is not atomic.

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::resources::Resource;

pub mod memory;
pub mod seaorm;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row not found")]
    NotFound,
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Constraint(msg),
            _ => Self::Db(err.to_string()),
        }
    }
}

#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// Rows matching `filter`, in `R::list_order`.
    async fn select_all(&self, filter: &R::Filter) -> Result<Vec<R>, StoreError>;

    /// The row stored under `key`, or `StoreError::NotFound`.
    async fn select_one(&self, key: &R::Key) -> Result<R, StoreError>;

    /// Insert `row` and return it as stored, with its assigned key.
    async fn insert(&self, row: R) -> Result<R, StoreError>;

    /// Overwrite every non-key column of the row with `row.key()`.
    /// Succeeds without effect when no such row exists.
    async fn update(&self, row: R) -> Result<(), StoreError>;
}
