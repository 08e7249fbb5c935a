use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::course::{Course, CourseFilters, CourseRequest, CourseUpdate};

impl StudieHub {
    pub async fn get_courses(&self, filters: &CourseFilters) -> Result<Vec<Course>, StudieHubError> {
        let response = self
            .get::<Vec<Course>>(&["courses"], &filters.query_pairs())
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    pub async fn get_course(&self, id: &str) -> Result<Course, StudieHubError> {
        self.get::<Course>(&["courses", id], &[])
            .await?
            .into_data("the course")
    }

    pub async fn create_course(&self, request: &CourseRequest) -> Result<Course, StudieHubError> {
        self.post::<_, Course>(&["courses"], request)
            .await?
            .into_data("the created course")
    }

    pub async fn update_course(&self, id: &str, update: &CourseUpdate) -> Result<Course, StudieHubError> {
        self.put::<_, Course>(&["courses", id], update)
            .await?
            .into_data("the updated course")
    }

    pub async fn delete_course(&self, id: &str) -> Result<String, StudieHubError> {
        let response = self.delete::<serde_json::Value>(&["courses", id]).await?;
        Ok(response.message)
    }
}
