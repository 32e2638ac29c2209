//! Handlers for shared cameras.

use axum::extract::State;
use axum::Json;
use camrelay_core::schema::{Camera, CameraList, LiveStream};
use camrelay_core::types::CameraId;

use super::relay;
use crate::error::AppResult;
use crate::middleware::auth::RequireToken;
use crate::middleware::json::ValidatedPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cameras
pub async fn list_cameras(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
) -> AppResult<Json<DataResponse<CameraList>>> {
    relay(
        state.angelcam.list_shared_cameras(&token).await,
        "Failed to retrieve cameras",
    )
}

/// GET /api/v1/cameras/{camera_id}
pub async fn get_camera(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    ValidatedPath(camera_id): ValidatedPath<CameraId>,
) -> AppResult<Json<DataResponse<Camera>>> {
    relay(
        state.angelcam.get_shared_camera(&token, camera_id).await,
        "Failed to retrieve camera",
    )
}

/// GET /api/v1/cameras/{camera_id}/live-stream
///
/// Resolves the stream endpoint without a start time, which upstream
/// answers with the camera's live stream URL.
pub async fn get_live_stream(
    State(state): State<AppState>,
    RequireToken(token): RequireToken,
    ValidatedPath(camera_id): ValidatedPath<CameraId>,
) -> AppResult<Json<DataResponse<LiveStream>>> {
    relay(
        state
            .angelcam
            .get_recording_stream(&token, camera_id, None)
            .await,
        "Unable to fetch live stream URL",
    )
}
