use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::category::{Category, CategoryRequest};

impl StudieHub {
    /// Active categories only.
    pub async fn get_categories(&self) -> Result<Vec<Category>, StudieHubError> {
        let response = self.get::<Vec<Category>>(&["categories"], &[]).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// All categories including inactive ones. Admin only.
    pub async fn get_all_categories(&self) -> Result<Vec<Category>, StudieHubError> {
        let response = self
            .get::<Vec<Category>>(&["categories", "admin", "all"], &[])
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, StudieHubError> {
        self.get::<Category>(&["categories", id], &[])
            .await?
            .into_data("the category")
    }

    pub async fn create_category(&self, request: &CategoryRequest) -> Result<Category, StudieHubError> {
        self.post::<_, Category>(&["categories"], request)
            .await?
            .into_data("the created category")
    }

    pub async fn update_category(&self, id: &str, request: &CategoryRequest) -> Result<Category, StudieHubError> {
        self.put::<_, Category>(&["categories", id], request)
            .await?
            .into_data("the updated category")
    }

    /// Soft delete. The backend refuses while courses still use the category.
    pub async fn delete_category(&self, id: &str) -> Result<String, StudieHubError> {
        let response = self.delete::<serde_json::Value>(&["categories", id]).await?;
        Ok(response.message)
    }

    pub async fn purge_category(&self, id: &str) -> Result<String, StudieHubError> {
        let response = self
            .delete::<serde_json::Value>(&["categories", id, "permanent"])
            .await?;
        Ok(response.message)
    }
}
