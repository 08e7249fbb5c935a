use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::nullable::null_as_default;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "BEGINNER",
            Difficulty::Intermediate => "INTERMEDIATE",
            Difficulty::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty: {}", s))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_id: String,
    /// Kept as text so unexpected backend values still deserialize.
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,

    // Trainer information
    #[serde(default, deserialize_with = "null_as_default")]
    pub trainer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trainer_bio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_of_work: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,

    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: String,
    pub description: String,
    pub category_id: String,
    pub difficulty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub trainer_name: String,
    pub trainer_bio: String,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
    pub field_of_work: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    pub language: String,
}

/// Partial course update sent with PUT; unset fields are omitted.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_of_work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl From<CourseRequest> for CourseUpdate {
    fn from(req: CourseRequest) -> Self {
        CourseUpdate {
            title: Some(req.title),
            description: Some(req.description),
            category_id: Some(req.category_id),
            difficulty: Some(req.difficulty),
            thumbnail_url: req.thumbnail_url,
            trainer_name: Some(req.trainer_name),
            trainer_bio: Some(req.trainer_bio),
            experience: Some(req.experience),
            linkedin_profile: req.linkedin_profile,
            field_of_work: Some(req.field_of_work),
            profile_picture_url: req.profile_picture_url,
            language: Some(req.language),
        }
    }
}

/// Server-side catalog filters. Empty values are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilters {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
}

impl CourseFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty.as_deref().filter(|d| !d.is_empty()) {
            pairs.push(("difficulty", difficulty.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}
