//! Shared-camera shapes returned by `/shared-cameras/`.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{CameraId, Timestamp};

/// Camera status: reachable.
pub const STATUS_ONLINE: &str = "online";

/// Camera status: unreachable.
pub const STATUS_OFFLINE: &str = "offline";

/// Camera status: upstream has not determined it yet.
pub const STATUS_UNKNOWN: &str = "unknown";

/// All recognized camera statuses.
pub const ALL_STATUSES: &[&str] = &[STATUS_ONLINE, STATUS_OFFLINE, STATUS_UNKNOWN];

/// Paginated camera listing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CameraList {
    pub count: u64,
    #[validate(url)]
    pub next: Option<String>,
    #[validate(url)]
    pub previous: Option<String>,
    #[validate(nested)]
    pub results: Vec<Camera>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Camera {
    #[validate(range(min = 1))]
    pub id: CameraId,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "type")]
    pub camera_type: String,
    #[validate(custom(function = "validate_camera_status"))]
    pub status: String,
    #[serde(default)]
    #[validate(url)]
    pub live_snapshot: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub snapshot: Option<Snapshot>,
    #[validate(nested)]
    pub streams: Vec<CameraStream>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    #[validate(nested)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub has_recording: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Snapshot {
    #[validate(url)]
    pub url: String,
    #[serde(default)]
    #[validate(url)]
    pub url_hd: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// A live stream endpoint advertised for a camera (e.g. `mjpeg`, `hls`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CameraStream {
    #[validate(length(min = 1))]
    pub format: String,
    #[validate(url)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Owner {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

fn validate_camera_status(status: &str) -> Result<(), ValidationError> {
    if ALL_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::new("camera_status").with_message(
            format!(
                "Unknown camera status '{status}'. Valid statuses: {}",
                ALL_STATUSES.join(", ")
            )
            .into(),
        ))
    }
}
