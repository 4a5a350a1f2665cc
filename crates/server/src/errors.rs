use appraisal::ExtractError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A missing or non-PDF upload, or a missing form field.
    InvalidUpload(String),
    /// Errors originating from the extraction pipeline.
    Extract(ExtractError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::Extract(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::InvalidUpload(msg) => {
                warn!("Rejected upload: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Extract(err) if err.is_client_error() => {
                warn!("Rejected extraction request: {err}");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Extract(err @ ExtractError::QuotaExhausted(_)) => {
                error!("Gemini API quota exceeded: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Extract(err) => {
                // Log the original error for debugging purposes
                error!("ExtractError: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
