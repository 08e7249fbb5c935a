use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::video::{Video, VideoDto};

impl StudieHub {
    pub async fn create_video(&self, video: &VideoDto) -> Result<Video, StudieHubError> {
        self.post::<_, Video>(&["videos"], video)
            .await?
            .into_data("the created video")
    }

    pub async fn get_video(&self, id: &str) -> Result<Video, StudieHubError> {
        self.get::<Video>(&["videos", id], &[])
            .await?
            .into_data("the video")
    }

    /// Videos of a course in backend order; see `view::course_detail::sort_videos`.
    pub async fn get_course_videos(&self, course_id: &str) -> Result<Vec<Video>, StudieHubError> {
        let response = self
            .get::<Vec<Video>>(&["videos", "course", course_id], &[])
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    pub async fn update_video(&self, id: &str, video: &VideoDto) -> Result<Video, StudieHubError> {
        self.put::<_, Video>(&["videos", id], video)
            .await?
            .into_data("the updated video")
    }

    pub async fn delete_video(&self, id: &str) -> Result<String, StudieHubError> {
        let response = self.delete::<serde_json::Value>(&["videos", id]).await?;
        Ok(response.message)
    }

    /// Moves one video; the backend shifts its siblings.
    pub async fn update_video_position(&self, id: &str, position: u32) -> Result<Option<Video>, StudieHubError> {
        let response = self
            .patch::<Video>(&["videos", id, "position"], &[("position", position.to_string())])
            .await?;
        Ok(response.data)
    }
}
