use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn healthz_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "activities": state.catalog.len().await,
        "build_id": state.build_id,
    }))
}
