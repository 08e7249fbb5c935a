use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::enrollment::{Enrollment, EnrollmentStats};

/// Enrollments the dashboard can actually render.
pub fn valid_enrollments(enrollments: Vec<Enrollment>) -> Vec<Enrollment> {
    enrollments
        .into_iter()
        .filter(|e| {
            e.course_id.as_deref().is_some_and(|id| !id.is_empty())
                && e.course_title.as_deref().is_some_and(|t| !t.is_empty())
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub enrollments: Vec<Enrollment>,
    pub stats: Option<EnrollmentStats>,
}

impl Dashboard {
    pub fn new(enrollments: Vec<Enrollment>) -> Self {
        Dashboard {
            enrollments: valid_enrollments(enrollments),
            stats: None,
        }
    }

    pub async fn load(hub: &StudieHub) -> Result<Self, StudieHubError> {
        hub.require_authenticated()?;
        let (enrollments, stats) = futures::join!(hub.get_enrollments(), hub.get_enrollment_stats());
        let mut dashboard = Dashboard::new(enrollments.map_err(|e| e.or_message("Failed to load enrollments"))?);
        dashboard.stats = match stats {
            Ok(stats) => Some(stats),
            Err(err) => {
                log::warn!("Error loading enrollment stats: {}", err);
                None
            }
        };
        Ok(dashboard)
    }

    pub fn in_progress(&self) -> impl Iterator<Item = &Enrollment> {
        self.enrollments.iter().filter(|e| !e.is_finished())
    }

    pub fn completed(&self) -> impl Iterator<Item = &Enrollment> {
        self.enrollments.iter().filter(|e| e.is_finished())
    }

    pub fn in_progress_count(&self) -> usize {
        self.in_progress().count()
    }

    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment(course_id: Option<&str>, title: Option<&str>, progress: f64, completed: bool) -> Enrollment {
        serde_json::from_value(serde_json::json!({
            "courseId": course_id,
            "courseTitle": title,
            "progressPercentage": progress,
            "isCompleted": completed,
        }))
        .unwrap()
    }

    #[test]
    fn drops_enrollments_without_course() {
        let dashboard = Dashboard::new(vec![
            enrollment(Some("c1"), Some("Rust"), 10.0, false),
            enrollment(None, Some("Orphan"), 0.0, false),
            enrollment(Some("c3"), None, 0.0, false),
            enrollment(Some(""), Some("Blank"), 0.0, false),
        ]);
        assert_eq!(dashboard.enrollments.len(), 1);
    }

    #[test]
    fn splits_progress_and_completed() {
        let dashboard = Dashboard::new(vec![
            enrollment(Some("c1"), Some("A"), 0.0, false),
            enrollment(Some("c2"), Some("B"), 60.0, false),
            enrollment(Some("c3"), Some("C"), 100.0, false),
            enrollment(Some("c4"), Some("D"), 80.0, true),
        ]);
        assert_eq!(dashboard.in_progress_count(), 2);
        assert_eq!(dashboard.completed_count(), 2);
        let done: Vec<_> = dashboard
            .completed()
            .filter_map(|e| e.course_title.as_deref())
            .collect();
        assert_eq!(done, vec!["C", "D"]);
    }
}
