use serde::{Deserialize, Serialize};

use crate::model::nullable::null_as_default;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub course_id: String,
    pub course_title: String,
    pub total_enrollments: u64,
    pub active_enrollments: u64,
    pub completed_enrollments: u64,
    pub total_videos: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub new_users_today: u64,
    pub new_enrollments_today: u64,
    pub active_users_today: u64,
    #[serde(default)]
    pub most_popular_course: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub most_popular_course_enrollments: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardStats {
    pub total_users: u64,
    pub total_courses: u64,
    pub total_enrollments: u64,
    pub total_videos: u64,
    pub new_users_this_month: u64,
    pub new_enrollments_this_month: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_stats: Vec<CourseStats>,
    pub recent_activity: RecentActivity,
}
