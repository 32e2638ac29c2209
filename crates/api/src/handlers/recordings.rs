//! Handlers for cloud recordings of a shared camera.

use axum::extract::State;
use axum::Json;
use camrelay_core::schema::{Recording, Stream, Timeline};
use camrelay_core::types::CameraId;

use super::relay;
use crate::error::AppResult;
use crate::middleware::auth::RequireToken;
use crate::middleware::json::{ValidatedPath, ValidatedQuery};
use crate::query::{StartParams, TimeRangeParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cameras/{camera_id}/recording
pub async fn get_recording(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    ValidatedPath(camera_id): ValidatedPath<CameraId>,
) -> AppResult<Json<DataResponse<Recording>>> {
    relay(
        state.angelcam.get_recording(&token, camera_id).await,
        "Failed to retrieve recording data",
    )
}

/// GET /api/v1/cameras/{camera_id}/recording/timeline?start=&end=
///
/// Both bounds are required; nothing is sent upstream without them.
pub async fn get_timeline(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    ValidatedPath(camera_id): ValidatedPath<CameraId>,
    ValidatedQuery(params): ValidatedQuery<TimeRangeParams>,
) -> AppResult<Json<DataResponse<Timeline>>> {
    let (start, end) = params.require()?;

    relay(
        state
            .angelcam
            .get_recording_timeline(&token, camera_id, start, end)
            .await,
        "Failed to retrieve timeline data",
    )
}

/// GET /api/v1/cameras/{camera_id}/recording/stream?start=
pub async fn get_stream(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    ValidatedPath(camera_id): ValidatedPath<CameraId>,
    ValidatedQuery(params): ValidatedQuery<StartParams>,
) -> AppResult<Json<DataResponse<Stream>>> {
    let start = params.require()?;

    relay(
        state
            .angelcam
            .get_recording_stream(&token, camera_id, Some(start))
            .await,
        "Failed to retrieve stream data",
    )
}
