//! HTTP error mapping.
//!
//! Every fallible handler returns [`AppResult`]; converting an [`AppError`]
//! into a response picks the status code, logs internal detail, and emits a
//! uniform `{"error": "..."}` body. Storage detail never reaches the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use galleria_core::error::CoreError;
use serde_json::json;

/// Errors a handler can surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error from `galleria_core`; carries its own public message.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure outside the image listing path.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Storage failure while listing images.
    ///
    /// Kept apart from [`AppError::Database`] because the listing endpoint
    /// promises the fixed body `{"error": "Error fetching images"}` for any
    /// storage failure.
    #[error("Image fetch error: {0}")]
    ImageFetch(sqlx::Error),

    /// Request was understood but invalid; message is shown to the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything else; message is logged, caller gets a generic body.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result alias used by every handler.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status code and public message for this error.
    ///
    /// Logging of internal detail happens here so every conversion path
    /// reports failures the same way.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Core(CoreError::Unauthorized(msg)) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Core(CoreError::Forbidden(msg)) => (StatusCode::FORBIDDEN, msg.clone()),

            AppError::Database(err) => classify_sqlx(err),

            AppError::ImageFetch(err) => {
                tracing::error!(error = %err, "Failed to fetch images");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error fetching images".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// Map a sqlx error onto the public surface.
///
/// `RowNotFound` is a 404. A unique-constraint violation on a `uq_*`
/// constraint is a 409, so schema naming doubles as the conflict contract.
/// Everything else is logged and collapsed to a generic 500.
fn classify_sqlx(err: &sqlx::Error) -> (StatusCode, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (StatusCode::NOT_FOUND, "Resource not found".to_string());
    }

    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return (
                    StatusCode::CONFLICT,
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}
