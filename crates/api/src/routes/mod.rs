pub mod auth;
pub mod cameras;
pub mod health;
pub mod streams;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /cameras                                         list shared cameras
/// /cameras/{camera_id}                             camera detail
/// /cameras/{camera_id}/live-stream                 live stream URL
/// /cameras/{camera_id}/recording                   recording state
/// /cameras/{camera_id}/recording/timeline          recorded segments (?start&end)
/// /cameras/{camera_id}/recording/stream            recorded stream (?start)
///
/// /streams/{domain}/{stream_id}/play               resume playback (POST)
/// /streams/{domain}/{stream_id}/pause              pause playback (POST)
/// /streams/{domain}/{stream_id}/speed              change speed (POST)
/// ```
///
/// Everything except `/auth/login` requires a session credential.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/cameras", cameras::router())
        .nest("/streams", streams::router())
}
