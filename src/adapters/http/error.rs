use crate::utils::error::HeroError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error body shape: `{"message": ["...", "..."]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: Vec<String>,
}

impl IntoResponse for HeroError {
    fn into_response(self) -> Response {
        let status = match &self {
            HeroError::Validation { .. } | HeroError::MalformedBody { .. } => {
                StatusCode::BAD_REQUEST
            }
            // No body and no CORS headers: the browser reports a network error
            HeroError::CorsRejected { .. } => return StatusCode::FORBIDDEN.into_response(),
            _ => {
                tracing::error!("Request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match self {
            HeroError::Validation { messages } => messages,
            HeroError::MalformedBody { message } => vec![message],
            _ => vec!["Internal server error".to_string()],
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
