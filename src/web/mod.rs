use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::database::ActivityCatalog;

pub mod routes;

use routes::{activities, signup};

pub fn router(catalog: Arc<ActivityCatalog>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(signup::signup_handler).delete(signup::unregister_handler),
        )
        // Front-end
        .nest_service("/static", get_service(ServeDir::new(&config.static_dir)))
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(catalog)
}
