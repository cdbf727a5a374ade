use std::sync::Arc;

use axum::{extract::State, Json};

use crate::database::{ActivityCatalog, CatalogSnapshot};
use crate::services::activities_service;

pub async fn activities_handler(
    State(catalog): State<Arc<ActivityCatalog>>,
) -> Json<CatalogSnapshot> {
    Json(activities_service::list_activities(&catalog))
}
