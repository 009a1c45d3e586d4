//! Uniform response shapes.
//!
//! Errors are `{"status": <code>, "message": <text>}`; lists are bare JSON
//! arrays; create and update answer with an empty body. Every entity response
//! carries a JSON content type and a wildcard CORS origin.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status: status.as_u16(), message: message.into() }
    }

    /// Encode as a response. An encoding failure is logged and the status is
    /// still sent, with an empty body.
    pub fn into_response_with_status(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match serde_json::to_vec(&self) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "marshal error json is failed");
                Vec::new()
            }
        };
        let mut res = (status, body).into_response();
        res.headers_mut().insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
        res
    }
}

/// Entity response with the shared headers.
pub fn entity_response(status: StatusCode, body: Vec<u8>) -> Response {
    let mut res = (status, body).into_response();
    let headers = res.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_shape() {
        let env = ErrorEnvelope::new(StatusCode::NOT_FOUND, "user_id=7 is not found");
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v, serde_json::json!({"status": 404, "message": "user_id=7 is not found"}));
    }

    #[test]
    fn error_response_keeps_status_and_content_type() {
        let res = ErrorEnvelope::new(StatusCode::METHOD_NOT_ALLOWED, "DELETE is Unsupported method")
            .into_response_with_status();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(res.headers()[header::CONTENT_TYPE], JSON_UTF8);
    }

    #[test]
    fn entity_response_allows_any_origin() {
        let res = entity_response(StatusCode::CREATED, Vec::new());
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
