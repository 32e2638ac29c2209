/// Upstream camera identifiers are positive integers.
pub type CameraId = u64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
