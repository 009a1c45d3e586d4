use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input that decoded but cannot be accepted.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("query {entity} failed: {source}")]
    Query { entity: &'static str, #[source] source: StoreError },
    #[error("select {entity} failed: {source}")]
    Select { entity: &'static str, #[source] source: StoreError },
    #[error("insert {entity} failed: {source}")]
    Insert { entity: &'static str, #[source] source: StoreError },
    #[error("update {entity} failed: {source}")]
    Update { entity: &'static str, #[source] source: StoreError },
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(key_name: &str, key: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{key_name}={key} is not found"))
    }

    /// Whether the caller sent something unacceptable, as opposed to a store failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_) | Self::Model(_))
    }
}
