use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::database::ActivityCatalog;
use crate::error::{ApiError, ApiResult};
use crate::services::signup_service;

// Raw pairs so a repeated `email` does not fail deserialization.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Resolves the activity name and email shared by both roster routes.
/// When `email` repeats, the last value wins.
fn signup_params(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<(String, String)> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let email = pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "email").then_some(value))
        .ok_or_else(|| ApiError::unprocessable("Missing required query parameter: email"))?;
    Ok((activity_name, email))
}

pub async fn signup_handler(
    State(catalog): State<Arc<ActivityCatalog>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let (activity_name, email) = signup_params(path, query)?;
    let message = signup_service::signup(&catalog, &activity_name, &email).map_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
        ApiError::from(e)
    })?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    State(catalog): State<Arc<ActivityCatalog>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let (activity_name, email) = signup_params(path, query)?;
    let message = signup_service::unregister(&catalog, &activity_name, &email).map_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
        ApiError::from(e)
    })?;
    Ok(Json(MessageResponse { message }))
}
