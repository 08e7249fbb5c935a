use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::user::{
    AuthData, GoogleAuthRequest, LoginRequest, OtpRequest, RegisterRequest, ResetPasswordRequest,
    User,
};

impl StudieHub {
    /// First factor: checks the password without issuing a token.
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<String, StudieHubError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .post::<_, serde_json::Value>(&["auth", "verify-password"], &request)
            .await?;
        Ok(response.message)
    }

    pub async fn send_otp(&self, email: &str) -> Result<String, StudieHubError> {
        self.otp_call("send", email, None).await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<String, StudieHubError> {
        self.otp_call("verify", email, Some(otp)).await
    }

    pub async fn resend_otp(&self, email: &str) -> Result<String, StudieHubError> {
        self.otp_call("resend", email, None).await
    }

    async fn otp_call(&self, action: &str, email: &str, otp: Option<&str>) -> Result<String, StudieHubError> {
        let request = OtpRequest {
            email: email.to_string(),
            otp: otp.map(str::to_string),
        };
        // `data` is a status string for send/resend and a bool for verify.
        let response = self
            .post::<_, serde_json::Value>(&["otp", action], &request)
            .await?;
        Ok(response.message)
    }

    /// Second factor: exchanges the emailed OTP for a token and stores the session.
    pub async fn complete_login(&self, email: &str, otp: &str) -> Result<User, StudieHubError> {
        let request = OtpRequest {
            email: email.to_string(),
            otp: Some(otp.to_string()),
        };
        self.authenticate(&["auth", "complete-login"], &request).await
    }

    /// Single-factor password login.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, StudieHubError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.authenticate(&["auth", "login"], &request).await
    }

    pub async fn login_with_otp(&self, email: &str, otp: &str) -> Result<User, StudieHubError> {
        let request = OtpRequest {
            email: email.to_string(),
            otp: Some(otp.to_string()),
        };
        self.authenticate(&["auth", "login-otp"], &request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, StudieHubError> {
        self.authenticate(&["auth", "register"], request).await
    }

    /// Exchanges a Google ID token for a StudieHub token.
    pub async fn google_login(&self, id_token: &str) -> Result<User, StudieHubError> {
        let request = GoogleAuthRequest {
            id_token: id_token.to_string(),
            client_id: self.config().google_client_id.clone(),
        };
        self.authenticate(&["auth", "google"], &request).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<String, StudieHubError> {
        let request = OtpRequest {
            email: email.to_string(),
            otp: None,
        };
        let response = self
            .post::<_, serde_json::Value>(&["auth", "forgot-password"], &request)
            .await?;
        Ok(response.message)
    }

    pub async fn verify_reset_otp(&self, email: &str, otp: &str) -> Result<String, StudieHubError> {
        let request = OtpRequest {
            email: email.to_string(),
            otp: Some(otp.to_string()),
        };
        let response = self
            .post::<_, serde_json::Value>(&["auth", "verify-reset-otp"], &request)
            .await?;
        Ok(response.message)
    }

    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<String, StudieHubError> {
        let request = ResetPasswordRequest {
            email: email.to_string(),
            otp: otp.to_string(),
            new_password: new_password.to_string(),
        };
        let response = self
            .post::<_, serde_json::Value>(&["auth", "reset-password"], &request)
            .await?;
        Ok(response.message)
    }

    async fn authenticate<B: serde::Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<User, StudieHubError> {
        let response = self.post::<_, AuthData>(segments, body).await?;
        let auth = response.into_data("a token")?;
        self.store_auth(auth)
    }
}
