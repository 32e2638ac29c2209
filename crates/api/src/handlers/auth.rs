//! Handler for the `/auth` resource (session exchange).

use axum::extract::State;
use axum::Json;
use camrelay_angelcam::AngelcamApiError;
use camrelay_core::error::CoreError;
use camrelay_core::schema::LoginRequest;
use serde::Serialize;

use crate::auth::token::encode_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::json::ValidatedJson;
use crate::state::AppState;

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Session credential to send as `Authorization: Bearer <token>`.
    pub token: String,
    /// Credential lifetime in seconds.
    pub expires_in: i64,
}

/// POST /api/v1/auth/login
///
/// Exchange an Angelcam personal-access-token for a session credential.
/// The token is checked against the upstream `/me/` endpoint first.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if let Err(err) = state.angelcam.verify_token(&input.personal_access_token).await {
        match &err {
            AngelcamApiError::ApiError { status, .. } => {
                tracing::info!(status, "Personal access token rejected by upstream");
            }
            AngelcamApiError::Request(e) => {
                tracing::warn!(error = %e, "Could not verify personal access token");
            }
        }
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid Personal Access Token".into(),
        )));
    }

    let token = encode_session_token(&input.personal_access_token, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Session token encoding error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}
