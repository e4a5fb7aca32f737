use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::signup_service::{SignupError, SignupErrorKind};

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Error response with a `{"detail": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }
}

impl From<SignupError> for ApiError {
    fn from(err: SignupError) -> Self {
        let status = match err.kind() {
            SignupErrorKind::NotFound => StatusCode::NOT_FOUND,
            // Duplicate signups are reported as a bad request, not 409.
            SignupErrorKind::Conflict => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_errors_map_to_status_codes() {
        let cases = [
            (SignupError::ActivityNotFound, StatusCode::NOT_FOUND),
            (SignupError::NotSignedUp, StatusCode::NOT_FOUND),
            (SignupError::AlreadySignedUp, StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            let detail = err.to_string();
            let api = ApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.detail, detail);
        }
    }

    #[test]
    fn into_response_keeps_status() {
        let resp = ApiError::unprocessable("email is required").into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
