//! Recorded and live stream descriptors.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A resolved recording stream starting at a requested point in time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Stream {
    #[validate(length(min = 1))]
    pub format: String,
    #[validate(url)]
    pub url: String,
    #[serde(default)]
    #[validate(url)]
    pub stream_info: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub stream_controls: Option<StreamControls>,
}

/// Transport-control URLs for a resolved stream.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StreamControls {
    #[serde(default)]
    #[validate(url)]
    pub base_url: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub play: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub pause: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub speed: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LiveStream {
    #[validate(url)]
    pub live_stream_url: String,
}
