use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum HolocronError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("Unusable upstream payload: {0}")]
    UpstreamPayload(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    ActorError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl HolocronError {
    /// True for every failure that originates at the external character source.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            HolocronError::Upstream(_)
                | HolocronError::UpstreamStatus(_)
                | HolocronError::UpstreamPayload(_)
        )
    }
}

impl IntoResponse for HolocronError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            HolocronError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ApiErrorObject {
                    code: "NOT_FOUND".to_string(),
                    message: message.clone(),
                },
            ),

            HolocronError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                },
            ),

            HolocronError::Upstream(_)
            | HolocronError::UpstreamStatus(_)
            | HolocronError::UpstreamPayload(_) => {
                error!(error = %self, "Character source unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorObject {
                        code: "UPSTREAM_UNAVAILABLE".to_string(),
                        message: "Failed to fetch characters from the external source."
                            .to_string(),
                    },
                )
            }

            HolocronError::Database(_)
            | HolocronError::ActorError(_)
            | HolocronError::IoError(_)
            | HolocronError::JsonError(_) => {
                error!(error = %self, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorObject {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorBody { inner: body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
