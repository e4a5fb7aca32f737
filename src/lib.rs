pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

use std::path::PathBuf;

use axum::{
    middleware,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::ActivityCatalog;
use crate::web::middleware::request_tracing;
use crate::web::routes::{activities, health, signup};

pub const BUILD_ID: &str = env!("ACTIVITIES_BUILD_ID");

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: ActivityCatalog,
    pub static_dir: PathBuf,
    pub build_id: &'static str,
}

impl AppState {
    pub fn new(catalog: ActivityCatalog, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            static_dir: static_dir.into(),
            build_id: BUILD_ID,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(activities::root_handler))
        .route("/healthz", get(health::healthz_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(signup::signup_handler).delete(signup::unregister_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(&state.static_dir)))
        // Rosters are live state.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(middleware::from_fn(request_tracing::request_tracing))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
