use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use sqlhub_core::error::CoreError;
use sqlhub_engine::{EngineError, TargetError};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`EngineError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sqlhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An execution error from `sqlhub_engine`.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A hub database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<TargetError> for AppError {
    fn from(err: TargetError) -> Self {
        Self::Engine(err.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- EngineError variants ---
            AppError::Engine(engine) => match engine {
                EngineError::BlockedByPolicy => (
                    StatusCode::CONFLICT,
                    "POLICY_BLOCKED",
                    engine.to_string(),
                ),
                EngineError::Connection(msg) => (
                    StatusCode::BAD_GATEWAY,
                    "TARGET_UNREACHABLE",
                    format!("connection failed: {msg}"),
                ),
                EngineError::Execution(msg) => (
                    StatusCode::BAD_REQUEST,
                    "EXECUTION_FAILED",
                    format!("execution failed: {msg}"),
                ),
                EngineError::Cancelled => (
                    StatusCode::REQUEST_TIMEOUT,
                    "CANCELLED",
                    engine.to_string(),
                ),
                EngineError::Ledger(err) => classify_sqlx_error(err),
            },

            // --- Hub database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
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
/// - Unique constraint violations (code 23505) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocked_policy_maps_to_conflict() {
        let response = AppError::Engine(EngineError::BlockedByPolicy).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let err = AppError::Core(CoreError::NotFound {
            entity: "server",
            id: 9,
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn target_connection_failure_maps_to_bad_gateway() {
        let err: AppError = TargetError::Connection("refused".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn row_not_found_maps_to_404() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
