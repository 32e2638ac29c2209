//! Inbound request bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255))]
    pub personal_access_token: String,
}

/// Body of `POST /streams/{domain}/{stream_id}/speed`, also forwarded upstream.
///
/// `speed` is a playback multiplier between 1x and 16x.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SpeedUpdate {
    #[validate(range(min = 1, max = 16))]
    pub speed: u32,
}
