use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use camrelay_angelcam::AngelcamApiError;
use camrelay_core::error::CoreError;
use camrelay_core::schema::SchemaError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `camrelay_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A JSON document (upstream response or request body) failed its schema.
    #[error("Schema validation failed: {0}")]
    Schema(#[from] SchemaError),

    /// Upstream answered with a non-success status, or could not be reached.
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: StatusCode, message: String },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map an upstream failure onto the status the caller should see.
    ///
    /// Error statuses (4xx/5xx) pass through unchanged with `message`.
    /// Transport failures and unexpected non-error statuses become
    /// `502 Bad Gateway`.
    pub fn upstream(err: AngelcamApiError, message: &str) -> Self {
        let status = err
            .status()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        tracing::warn!(error = %err, status = status.as_u16(), "Upstream call failed");
        AppError::Upstream {
            status,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone(), None)
                }
                CoreError::Forbidden(msg) => {
                    (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone(), None)
                }
            },

            // --- Schema gate ---
            AppError::Schema(err) => {
                tracing::warn!(error = %err, "Schema validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Validation failed".to_string(),
                    Some(err.details()),
                )
            }

            // --- Upstream ---
            AppError::Upstream { status, message } => {
                (*status, "UPSTREAM_ERROR", message.clone(), None)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}
