use axum::{extract::State, response::Redirect, Json};

use crate::models::ActivityListing;
use crate::services::signup_service;
use crate::AppState;

pub async fn root_handler() -> Redirect {
    Redirect::temporary("/static/index.html")
}

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityListing> {
    Json(signup_service::list_activities(&state.catalog).await)
}
