//! Handlers for recording stream transport controls (play, pause, speed).
//!
//! These target the stream host named in the request path rather than the
//! fixed API base URL, so the host and stream id are validated first.

use axum::extract::State;
use axum::Json;
use camrelay_core::schema::SpeedUpdate;
use camrelay_core::stream_target::{validate_stream_domain, validate_stream_id};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireToken;
use crate::middleware::json::{ValidatedJson, ValidatedPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// Playback state reported after a successful control call.
#[derive(Debug, Serialize)]
pub struct PlaybackStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
}

/// POST /api/v1/streams/{domain}/{stream_id}/play
pub async fn play(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    ValidatedPath((domain, stream_id)): ValidatedPath<(String, String)>,
) -> AppResult<Json<DataResponse<PlaybackStatus>>> {
    check_target(&state, &domain, &stream_id)?;

    state
        .angelcam
        .play_stream(&token, &domain, &stream_id)
        .await
        .map_err(|e| AppError::upstream(e, "Failed to play the recording"))?;

    Ok(Json(DataResponse {
        data: PlaybackStatus {
            status: "playing",
            speed: None,
        },
    }))
}

/// POST /api/v1/streams/{domain}/{stream_id}/pause
pub async fn pause(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    ValidatedPath((domain, stream_id)): ValidatedPath<(String, String)>,
) -> AppResult<Json<DataResponse<PlaybackStatus>>> {
    check_target(&state, &domain, &stream_id)?;

    state
        .angelcam
        .pause_stream(&token, &domain, &stream_id)
        .await
        .map_err(|e| AppError::upstream(e, "Failed to pause the recording"))?;

    Ok(Json(DataResponse {
        data: PlaybackStatus {
            status: "paused",
            speed: None,
        },
    }))
}

/// POST /api/v1/streams/{domain}/{stream_id}/speed
///
/// Body: `{ "speed": n }` with `n` in 1..=16.
pub async fn set_speed(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    ValidatedPath((domain, stream_id)): ValidatedPath<(String, String)>,
    ValidatedJson(input): ValidatedJson<SpeedUpdate>,
) -> AppResult<Json<DataResponse<PlaybackStatus>>> {
    check_target(&state, &domain, &stream_id)?;

    state
        .angelcam
        .set_stream_speed(&token, &domain, &stream_id, input.speed)
        .await
        .map_err(|e| AppError::upstream(e, "Failed to change the playback speed"))?;

    Ok(Json(DataResponse {
        data: PlaybackStatus {
            status: "speed_updated",
            speed: Some(input.speed),
        },
    }))
}

fn check_target(state: &AppState, domain: &str, stream_id: &str) -> AppResult<()> {
    validate_stream_domain(domain, &state.config.angelcam.stream_domain_allowlist)?;
    validate_stream_id(stream_id)?;
    Ok(())
}
