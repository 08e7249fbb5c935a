use serde::{Deserialize, Serialize};

use crate::model::nullable::null_as_default;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    /// Missing when the backend could not resolve the course.
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub course_description: Option<String>,
    #[serde(default)]
    pub course_thumbnail: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enrolled_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_accessed_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress_percentage: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_videos: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_videos: u32,
}

impl Enrollment {
    pub fn is_finished(&self) -> bool {
        self.is_completed || self.progress_percentage >= 100.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub course_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStats {
    pub total_enrollments: u32,
    pub completed_enrollments: u32,
    pub completion_rate: f64,
}

/// Progress snapshot returned by the progress API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoCompletionResponse {
    pub course_id: String,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub already_completed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_completed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_videos: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_video_ids: Vec<String>,
}
