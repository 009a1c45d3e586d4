//! Generic list / create / update handlers shared by every entity path.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::QueryRejection, Query, State},
    http::{Method, StatusCode},
    response::Response,
};
use service::{Resource, ResourceService};
use tracing::info;

use crate::envelope::entity_response;
use crate::errors::ApiError;

fn decode<T>(body: Result<Bytes, BytesRejection>) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let raw = body.map_err(|e| ApiError::bad_request("Read payload is failed", e))?;
    serde_json::from_slice(&raw).map_err(|e| ApiError::bad_request("Parse payload is failed", e))
}

/// `GET`: the rows as a JSON array.
pub async fn list<R: Resource>(
    State(svc): State<ResourceService<R>>,
    query: Result<Query<R::ListQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request("Parse query is failed", e))?;
    let rows = svc.list(query).await?;
    let body = serde_json::to_vec(&rows).map_err(ApiError::serialization)?;
    info!(entity = R::NAME, count = rows.len(), "list");
    Ok(entity_response(StatusCode::OK, body))
}

/// `POST`: 201 with an empty body.
pub async fn create<R: Resource>(
    State(svc): State<ResourceService<R>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let input: R::Create = decode(body)?;
    svc.create(input).await?;
    Ok(entity_response(StatusCode::CREATED, Vec::new()))
}

/// `PUT`: 200 with an empty body; 404 when the key does not exist.
pub async fn update<R: Resource>(
    State(svc): State<ResourceService<R>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let input: R::Update = decode(body)?;
    svc.update(input).await?;
    Ok(entity_response(StatusCode::OK, Vec::new()))
}

/// Any other method on an entity path.
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}
