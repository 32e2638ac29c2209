//! Route definitions for shared cameras and their recordings.
//!
//! ```text
//! GET /                                   list_cameras
//! GET /{camera_id}                        get_camera
//! GET /{camera_id}/live-stream            get_live_stream
//! GET /{camera_id}/recording              get_recording
//! GET /{camera_id}/recording/timeline     get_timeline
//! GET /{camera_id}/recording/stream       get_stream
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{cameras, recordings};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cameras::list_cameras))
        .route("/{camera_id}", get(cameras::get_camera))
        .route("/{camera_id}/live-stream", get(cameras::get_live_stream))
        .route("/{camera_id}/recording", get(recordings::get_recording))
        .route(
            "/{camera_id}/recording/timeline",
            get(recordings::get_timeline),
        )
        .route("/{camera_id}/recording/stream", get(recordings::get_stream))
}
