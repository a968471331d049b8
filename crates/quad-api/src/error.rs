// API error taxonomy mapped onto HTTP responses
//
// Every failure answers with the `{ "error": string }` envelope. Internal
// details stay in the log; the wire carries a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quad_contracts::ErrorResponse;
use quad_core::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed field validation
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    /// Write attempted without presenting a creator_id
    #[error("creator_id is required")]
    Unauthorized,

    /// Presented creator_id does not match the stored creator
    #[error("Not the creator of this event")]
    Forbidden,

    #[error("Event not found")]
    NotFound,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {e:#}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
