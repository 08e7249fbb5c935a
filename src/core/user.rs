use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::user::{UpdateProfileRequest, UserProfile};

impl StudieHub {
    pub async fn get_profile(&self) -> Result<UserProfile, StudieHubError> {
        self.get::<UserProfile>(&["user", "profile"], &[])
            .await?
            .into_data("the profile")
    }

    /// Updates the profile and mirrors the change into the stored session user.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<Option<UserProfile>, StudieHubError> {
        let response = self
            .put::<_, UserProfile>(&["user", "profile"], request)
            .await?;
        if let Some(profile) = &response.data {
            self.write_session().update_user(profile)?;
        }
        Ok(response.data)
    }
}
