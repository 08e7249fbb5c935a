use serde::{Deserialize, Serialize};

use crate::model::nullable::null_as_default;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub course_id: String,
    pub video_url: String,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub drive_notes_file_link: Option<String>,
    #[serde(default)]
    pub drive_notes_file_name: Option<String>,
    #[serde(default)]
    pub drive_code_file_links: Option<Vec<String>>,
    #[serde(default)]
    pub drive_code_file_names: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Video {
    pub fn has_files(&self) -> bool {
        self.drive_notes_file_link.as_deref().is_some_and(|l| !l.is_empty())
            || self
                .drive_code_file_links
                .as_ref()
                .is_some_and(|links| !links.is_empty())
    }
}

/// Create/update payload for a video.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    pub title: String,
    pub description: String,
    pub course_id: String,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_notes_file_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_notes_file_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub drive_code_file_links: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub drive_code_file_names: Vec<String>,
}
