use serde::{Deserialize, Serialize};

use crate::error::StudieHubError;
use crate::model::nullable::null_as_default;

/// Envelope wrapped around every StudieHub response body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    pub data: Option<T>,

    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,

    #[serde(default)]
    pub timestamp: Option<String>,
}

impl<T> ApiResponse<T> {
    /// The payload, or an error naming what was expected.
    pub fn into_data(self, what: &str) -> Result<T, StudieHubError> {
        self.data
            .ok_or_else(|| StudieHubError::new(&format!("Response did not include {}", what)))
    }
}
