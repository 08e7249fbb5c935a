use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::enrollment::{Enrollment, EnrollmentRequest, EnrollmentStats, VideoCompletionResponse};

impl StudieHub {
    pub async fn enroll(&self, course_id: &str) -> Result<Enrollment, StudieHubError> {
        let request = EnrollmentRequest {
            course_id: course_id.to_string(),
        };
        self.post::<_, Enrollment>(&["enrollments"], &request)
            .await?
            .into_data("the enrollment")
    }

    pub async fn get_enrollments(&self) -> Result<Vec<Enrollment>, StudieHubError> {
        self.enrollment_list(&["enrollments"]).await
    }

    pub async fn get_completed_enrollments(&self) -> Result<Vec<Enrollment>, StudieHubError> {
        self.enrollment_list(&["enrollments", "completed"]).await
    }

    pub async fn get_recent_enrollments(&self) -> Result<Vec<Enrollment>, StudieHubError> {
        self.enrollment_list(&["enrollments", "recent"]).await
    }

    pub async fn get_enrollment_by_course(&self, course_id: &str) -> Result<Enrollment, StudieHubError> {
        self.get::<Enrollment>(&["enrollments", "course", course_id], &[])
            .await?
            .into_data("the enrollment")
    }

    /// Touches the enrollment's last-accessed time.
    pub async fn access_course(&self, course_id: &str) -> Result<Enrollment, StudieHubError> {
        self.put::<_, Enrollment>(
            &["enrollments", "course", course_id, "access"],
            &serde_json::json!({}),
        )
        .await?
        .into_data("the enrollment")
    }

    pub async fn check_enrollment(&self, course_id: &str) -> Result<bool, StudieHubError> {
        let response = self
            .get::<bool>(&["enrollments", "check", course_id], &[])
            .await?;
        Ok(response.data.unwrap_or(false))
    }

    pub async fn get_enrollment_stats(&self) -> Result<EnrollmentStats, StudieHubError> {
        self.get::<EnrollmentStats>(&["enrollments", "stats"], &[])
            .await?
            .into_data("enrollment statistics")
    }

    pub async fn mark_video_complete(
        &self,
        course_id: &str,
        video_id: &str,
    ) -> Result<VideoCompletionResponse, StudieHubError> {
        self.put::<_, VideoCompletionResponse>(
            &["progress", "courses", course_id, "videos", video_id, "complete"],
            &serde_json::json!({}),
        )
        .await?
        .into_data("course progress")
    }

    pub async fn get_course_progress(&self, course_id: &str) -> Result<VideoCompletionResponse, StudieHubError> {
        self.get::<VideoCompletionResponse>(&["progress", "courses", course_id], &[])
            .await?
            .into_data("course progress")
    }

    async fn enrollment_list(&self, segments: &[&str]) -> Result<Vec<Enrollment>, StudieHubError> {
        let response = self.get::<Vec<Enrollment>>(segments, &[]).await?;
        Ok(response.data.unwrap_or_default())
    }
}
