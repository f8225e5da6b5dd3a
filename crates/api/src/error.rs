use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::extract::JsonError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent
/// `{ "error": ..., "code": ... }` JSON error bodies. Validation
/// failures keep their field -> message map so clients can render
/// per-field errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A strict JSON decode failure from [`StrictJson`].
    ///
    /// [`StrictJson`]: crate::extract::StrictJson
    #[error(transparent)]
    Json(#[from] JsonError),

    /// One or more entity validation rules failed.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    /// The requested entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The path id parameter did not parse as a positive integer.
    #[error("invalid id parameter")]
    InvalidIdParameter,

    /// Placeholder endpoint without an implementation yet.
    #[error("not implemented")]
    NotImplemented,

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Decode failures carry their own code and message.
            AppError::Json(err) => return err.into_response(),

            // Validation keeps the per-field map as the error payload.
            AppError::Validation(errors) => {
                let body = json!({
                    "error": errors,
                    "code": "FAILED_VALIDATION",
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            AppError::NotFound { .. } | AppError::InvalidIdParameter => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "the requested resource could not be found".to_string(),
            ),

            AppError::NotImplemented => (
                StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                "this endpoint is not yet implemented".to_string(),
            ),

            AppError::Database(err) => classify_sqlx_error(&err),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "the server encountered a problem and could not process your request"
                        .to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message; the detail is
///   logged server-side only.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "the requested resource could not be found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "the server encountered a problem and could not process your request".to_string(),
            )
        }
    }
}
