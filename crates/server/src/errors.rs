use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

use crate::envelope::ErrorEnvelope;

/// Failure of one request. The message is what the caller sees; `cause`
/// only goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: String, cause: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{message}")]
    Store { message: String, cause: String },
    #[error("{message}")]
    Serialization { message: String, cause: String },
    #[error("{0} is Unsupported method")]
    MethodNotAllowed(Method),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>, cause: impl ToString) -> Self {
        Self::BadRequest { message: message.into(), cause: cause.to_string() }
    }

    pub fn store(message: impl Into<String>, cause: impl ToString) -> Self {
        Self::Store { message: message.into(), cause: cause.to_string() }
    }

    pub fn serialization(cause: impl ToString) -> Self {
        Self::Serialization { message: "Marshal JSON is failed".into(), cause: cause.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store { .. } | Self::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::BadRequest { message: msg.clone(), cause: msg },
            ServiceError::Model(e) => {
                let msg = match e {
                    models::errors::ModelError::Validation(m) => m,
                };
                Self::BadRequest { message: msg.clone(), cause: msg }
            }
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            e @ ServiceError::Query { .. } => Self::store("Execute Query is failed", e),
            ServiceError::Select { entity, source } => {
                Self::store(format!("Select {entity} is failed"), source)
            }
            e @ ServiceError::Insert { .. } => Self::store("Insert Data is failed", e),
            e @ ServiceError::Update { .. } => Self::store("Update Data is failed", e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::BadRequest { cause, .. } => warn!(%status, error = %cause, "rejected request"),
            Self::NotFound(msg) => warn!(%status, error = %msg, "target row missing"),
            Self::MethodNotAllowed(method) => warn!(%status, %method, "unsupported method"),
            Self::Store { cause, .. } | Self::Serialization { cause, .. } => {
                error!(%status, error = %cause, "request failed")
            }
        }
        ErrorEnvelope::new(status, self.to_string()).into_response_with_status()
    }
}
