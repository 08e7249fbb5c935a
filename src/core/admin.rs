use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::admin_stats::AdminDashboardStats;

impl StudieHub {
    pub async fn get_admin_stats(&self) -> Result<AdminDashboardStats, StudieHubError> {
        self.get::<AdminDashboardStats>(&["admin", "stats"], &[])
            .await?
            .into_data("dashboard statistics")
    }
}
