//! Route definitions for stream transport controls.
//!
//! Mounted at `/streams`. `{domain}` is the recording host the stream was
//! resolved on (`host[:port]`).
//!
//! ```text
//! POST /{domain}/{stream_id}/play     play
//! POST /{domain}/{stream_id}/pause    pause
//! POST /{domain}/{stream_id}/speed    set_speed
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::streams;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{domain}/{stream_id}/play", post(streams::play))
        .route("/{domain}/{stream_id}/pause", post(streams::pause))
        .route("/{domain}/{stream_id}/speed", post(streams::set_speed))
}
