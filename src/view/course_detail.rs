use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::course::Course;
use crate::model::enrollment::{Enrollment, VideoCompletionResponse};
use crate::model::video::Video;
use crate::view::catalog::parse_timestamp;
use crate::view::notice::Notice;

pub const DESCRIPTION_LIMIT: usize = 200;
pub const TRAINER_BIO_LIMIT: usize = 150;

static YOUTUBE_ID: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})").expect("youtube id pattern"),
        Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})").expect("youtube embed pattern"),
    ]
});

/// Position ascending with unpositioned videos last, ties by creation time.
pub fn sort_videos(videos: &mut [Video]) {
    videos.sort_by(|a, b| {
        let pa = a.position.unwrap_or(u32::MAX);
        let pb = b.position.unwrap_or(u32::MAX);
        pa.cmp(&pb)
            .then_with(|| parse_timestamp(&a.created_at).cmp(&parse_timestamp(&b.created_at)))
    });
}

pub fn youtube_video_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Embed URL for YouTube links; anything else is returned unchanged.
pub fn embed_url(url: &str) -> String {
    match youtube_video_id(url) {
        Some(id) => format!("https://www.youtube.com/embed/{}", id),
        None => url.to_string(),
    }
}

pub fn thumbnail_url(url: &str) -> Option<String> {
    youtube_video_id(url).map(|id| format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id))
}

pub fn progress_percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(completed) / f64::from(total) * 100.0).round() as u32
}

pub fn enrollment_status(enrollment: Option<&Enrollment>) -> &'static str {
    match enrollment {
        None => "Not Enrolled",
        Some(e) if e.is_completed => "Completed",
        Some(e) if e.progress_percentage > 0.0 => "In Progress",
        Some(_) => "Not Started",
    }
}

/// Colour bucket of a progress bar.
pub fn progress_color(progress_percentage: f64) -> &'static str {
    if progress_percentage >= 100.0 {
        "primary"
    } else if progress_percentage >= 50.0 {
        "accent"
    } else if progress_percentage > 0.0 {
        "warn"
    } else {
        "basic"
    }
}

/// First `limit` characters followed by `...` when the text is longer.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let head: String = text.chars().take(limit).collect();
        format!("{}...", head)
    }
}

/// Accepts full URLs, `www.` or `linkedin.com` prefixes, or a bare username.
pub fn linkedin_url(profile: &str) -> Option<String> {
    let url = profile.trim();
    if url.is_empty() {
        return None;
    }
    let full = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.starts_with("www.") || url.starts_with("linkedin.com") {
        format!("https://{}", url)
    } else if !url.contains("linkedin.com") {
        format!("https://www.linkedin.com/in/{}", url)
    } else {
        format!("https://{}", url)
    };
    Some(full)
}

pub fn time_since(enrolled_at: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(enrolled_at) else {
        return "Unknown".to_string();
    };
    let days = (now - then).num_days();
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => {
            let weeks = d / 7;
            format!("{} week{} ago", weeks, if weeks > 1 { "s" } else { "" })
        }
        d => {
            let months = d / 30;
            format!("{} month{} ago", months, if months > 1 { "s" } else { "" })
        }
    }
}

/// Completed-video bookkeeping fed by the progress API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseProgress {
    pub completed: HashSet<String>,
    pub total_completed: u32,
    pub total_videos: u32,
}

impl CourseProgress {
    /// Replaces local state with the server snapshot. A zero total falls
    /// back to the number of videos on screen.
    pub fn merge(&mut self, response: &VideoCompletionResponse, local_video_count: usize) {
        self.completed = response.completed_video_ids.iter().cloned().collect();
        self.total_completed = response.total_completed;
        self.total_videos = if response.total_videos > 0 {
            response.total_videos
        } else {
            local_video_count as u32
        };
    }

    pub fn is_completed(&self, video_id: &str) -> bool {
        self.completed.contains(video_id)
    }

    pub fn percentage(&self) -> u32 {
        progress_percentage(self.total_completed, self.total_videos)
    }
}

/// State of the course player page.
#[derive(Debug, Clone)]
pub struct CourseDetailView {
    pub course: Course,
    pub category_name: String,
    pub videos: Vec<Video>,
    pub selected: Option<usize>,
    pub enrolled: bool,
    pub enrollment: Option<Enrollment>,
    pub progress: CourseProgress,
}

impl CourseDetailView {
    /// Course, videos and enrollment check load concurrently; category,
    /// enrollment details and progress follow once those are known.
    pub async fn load(hub: &StudieHub, course_id: &str) -> Result<Self, StudieHubError> {
        let signed_in = hub.current_user().is_some();
        let (course, videos, enrolled) = futures::join!(
            hub.get_course(course_id),
            hub.get_course_videos(course_id),
            async {
                if signed_in {
                    hub.check_enrollment(course_id).await
                } else {
                    Ok(false)
                }
            }
        );

        let course = course.map_err(|e| e.or_message("Course not found"))?;
        let mut videos = videos.unwrap_or_else(|err| {
            log::warn!("Error loading videos for {}: {}", course_id, err);
            Vec::new()
        });
        sort_videos(&mut videos);
        let enrolled = enrolled.unwrap_or_else(|err| {
            log::warn!("Error checking enrollment for {}: {}", course_id, err);
            false
        });

        let category_name = if course.category_id.is_empty() {
            String::new()
        } else {
            match hub.get_category(&course.category_id).await {
                Ok(category) => category.name,
                Err(err) => {
                    log::debug!("Error loading category {}: {}", course.category_id, err);
                    "Unknown".to_string()
                }
            }
        };

        let mut view = CourseDetailView {
            course,
            category_name,
            selected: if videos.is_empty() { None } else { Some(0) },
            videos,
            enrolled,
            enrollment: None,
            progress: CourseProgress::default(),
        };

        if view.enrolled {
            view.reload_enrollment(hub).await;
            match hub.get_course_progress(course_id).await {
                Ok(progress) => view.progress.merge(&progress, view.videos.len()),
                Err(err) => log::warn!("Error loading progress for {}: {}", course_id, err),
            }
        }
        Ok(view)
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.selected.and_then(|i| self.videos.get(i))
    }

    pub fn select(&mut self, index: usize) -> Option<&Video> {
        if index < self.videos.len() {
            self.selected = Some(index);
        }
        self.selected_video()
    }

    /// Enrolls, treating "already enrolled" as success.
    pub async fn enroll(&mut self, hub: &StudieHub) -> Result<Notice, StudieHubError> {
        hub.require_authenticated()?;
        let course_id = self.course.id.clone();
        match hub.enroll(&course_id).await {
            Ok(enrollment) => {
                self.enrollment = Some(enrollment);
                self.enrolled = true;
                match hub.access_course(&course_id).await {
                    Ok(enrollment) => self.enrollment = Some(enrollment),
                    Err(err) => log::warn!("Error accessing course {}: {}", course_id, err),
                }
                Ok(Notice::success("Successfully enrolled in course!"))
            }
            Err(err) if err.is_already_enrolled() => {
                self.enrolled = true;
                self.reload_enrollment(hub).await;
                Ok(Notice::success("You are already enrolled in this course"))
            }
            Err(err) => Err(err.or_message("Failed to enroll in course")),
        }
    }

    pub async fn mark_selected_complete(&mut self, hub: &StudieHub) -> Result<Notice, StudieHubError> {
        if !self.enrolled {
            return Err(StudieHubError::new("Enroll in the course to track progress"));
        }
        let video_id = self
            .selected_video()
            .map(|v| v.id.clone())
            .ok_or_else(|| StudieHubError::new("No video selected"))?;

        let response = hub
            .mark_video_complete(&self.course.id, &video_id)
            .await
            .map_err(|e| e.or_message("Failed to mark video as completed"))?;
        self.progress.merge(&response, self.videos.len());
        self.reload_enrollment(hub).await;

        Ok(if response.already_completed {
            Notice::success("Already completed")
        } else {
            Notice::success("Video marked as completed!")
        })
    }

    pub fn status(&self) -> &'static str {
        enrollment_status(self.enrollment.as_ref())
    }

    async fn reload_enrollment(&mut self, hub: &StudieHub) {
        match hub.get_enrollment_by_course(&self.course.id).await {
            Ok(enrollment) => self.enrollment = Some(enrollment),
            Err(err) => log::warn!("Error loading enrollment for {}: {}", self.course.id, err),
        }
    }
}
