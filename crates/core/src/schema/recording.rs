//! Cloud-recording shapes: recording state and the recorded timeline.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::Timestamp;

/// Recording state of a single camera.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_recording_window"))]
pub struct Recording {
    #[validate(length(min = 1))]
    pub status: String,
    /// ISO 8601 duration, e.g. `P7D`.
    #[serde(default)]
    pub retention: Option<String>,
    #[serde(default)]
    pub recording_start: Option<Timestamp>,
    #[serde(default)]
    pub recording_end: Option<Timestamp>,
}

/// Recorded segments within a requested time range.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Timeline {
    #[validate(nested)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_segment_bounds"))]
pub struct Segment {
    pub start: Timestamp,
    pub end: Timestamp,
}

fn validate_recording_window(recording: &Recording) -> Result<(), ValidationError> {
    match (recording.recording_start, recording.recording_end) {
        (Some(start), Some(end)) if end < start => Err(ValidationError::new("recording_window")
            .with_message("recording_end must not precede recording_start".into())),
        _ => Ok(()),
    }
}

fn validate_segment_bounds(segment: &Segment) -> Result<(), ValidationError> {
    if segment.end < segment.start {
        return Err(ValidationError::new("segment_bounds")
            .with_message("segment end must not precede its start".into()));
    }
    Ok(())
}
