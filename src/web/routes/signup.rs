use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::services::signup_service;
use crate::web::error::ApiError;
use crate::AppState;

/// Raw query pairs, so a repeated key is not a deserialization error.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(name) = path.map_err(|e| ApiError::new(e.status(), e.body_text()))?;
    Ok(name)
}

/// Pulls a non-empty `email` out of the query string, or fails with 422.
/// When the key repeats, the last value wins.
fn required_email(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<String, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let email = pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last();
    match email {
        Some(email) if !email.is_empty() => Ok(email),
        Some(_) => Err(ApiError::unprocessable("query parameter `email` must not be empty")),
        None => Err(ApiError::unprocessable("missing required query parameter `email`")),
    }
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = required_email(query)?;

    match signup_service::sign_up(&state.catalog, &activity_name, &email).await {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "signup_ok");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!("Signup failed for {} / {}: {}", activity_name, email, e);
            Err(e.into())
        }
    }
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = required_email(query)?;

    match signup_service::unregister(&state.catalog, &activity_name, &email).await {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "unregister_ok");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!("Unregister failed for {} / {}: {}", activity_name, email, e);
            Err(e.into())
        }
    }
}
