//! Sign-in, sign-up and password-reset flows.
//!
//! Each flow is a linear chain of backend calls. A failed step leaves the
//! flow where it was so the user can correct the input and resubmit; nothing
//! is retried automatically.

use std::time::{Duration, Instant};

use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::user::{RegisterRequest, User};
use crate::view::notice::Notice;
use crate::view::validation::{
    SignInForm, SignUpForm, validate_email, validate_new_password, validate_otp, validate_sign_in,
    validate_sign_up,
};

pub const RESEND_COOLDOWN: Duration = Duration::from_secs(60);

/// Blocks OTP resends for [`RESEND_COOLDOWN`] after each send.
#[derive(Debug, Clone, Default)]
pub struct ResendCooldown {
    started: Option<Instant>,
}

impl ResendCooldown {
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    pub fn clear(&mut self) {
        self.started = None;
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        match self.started {
            Some(started) => RESEND_COOLDOWN.saturating_sub(now.saturating_duration_since(started)),
            None => Duration::ZERO,
        }
    }

    pub fn is_active_at(&self, now: Instant) -> bool {
        !self.remaining_at(now).is_zero()
    }

    fn check(&self, now: Instant) -> Result<(), StudieHubError> {
        let remaining = self.remaining_at(now);
        if remaining.is_zero() {
            Ok(())
        } else {
            // Round up so "0s" is never shown while still blocked.
            let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
            Err(StudieHubError::new(&format!(
                "Please wait {}s before requesting another code",
                secs
            )))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpStep {
    Details,
    Otp,
    Done,
}

/// Password, then emailed OTP, then token.
pub struct SignInFlow<'a> {
    hub: &'a StudieHub,
    step: OtpStep,
    email: String,
    cooldown: ResendCooldown,
}

impl<'a> SignInFlow<'a> {
    pub fn new(hub: &'a StudieHub) -> Self {
        SignInFlow {
            hub,
            step: OtpStep::Details,
            email: String::new(),
            cooldown: ResendCooldown::default(),
        }
    }

    pub fn step(&self) -> OtpStep {
        self.step
    }

    pub fn cooldown(&self) -> &ResendCooldown {
        &self.cooldown
    }

    pub async fn submit_credentials(&mut self, email: &str, password: &str) -> Result<Notice, StudieHubError> {
        validate_sign_in(&SignInForm { email, password })?;
        let email = email.trim();

        self.hub
            .verify_password(email, password)
            .await
            .map_err(|e| e.or_message("Invalid credentials"))?;
        log::debug!("Password verified for {}, requesting OTP", email);

        self.hub
            .send_otp(email)
            .await
            .map_err(|e| e.or_message("Failed to send OTP"))?;

        self.email = email.to_string();
        self.step = OtpStep::Otp;
        self.cooldown.start(Instant::now());
        Ok(Notice::success("OTP sent to your email! Please verify to continue."))
    }

    pub async fn submit_otp(&mut self, otp: &str) -> Result<User, StudieHubError> {
        if self.step != OtpStep::Otp {
            return Err(StudieHubError::new("Enter your email and password first"));
        }
        validate_otp(otp)?;

        let user = self
            .hub
            .complete_login(&self.email, otp.trim())
            .await
            .map_err(|e| e.or_message("Invalid OTP"))?;
        self.step = OtpStep::Done;
        Ok(user)
    }

    pub async fn resend(&mut self) -> Result<Notice, StudieHubError> {
        resend(self.hub, self.step, &self.email, &mut self.cooldown).await
    }

    /// Back to the password step; the cooldown is dropped.
    pub fn back(&mut self) {
        self.step = OtpStep::Details;
        self.cooldown.clear();
    }
}

/// Sign-up form data kept until the OTP is confirmed.
#[derive(Debug, Clone, Default)]
pub struct SignUpDetails {
    pub username: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

/// Emailed OTP first, registration after the code is verified.
pub struct SignUpFlow<'a> {
    hub: &'a StudieHub,
    step: OtpStep,
    details: SignUpDetails,
    cooldown: ResendCooldown,
}

impl<'a> SignUpFlow<'a> {
    pub fn new(hub: &'a StudieHub) -> Self {
        SignUpFlow {
            hub,
            step: OtpStep::Details,
            details: SignUpDetails::default(),
            cooldown: ResendCooldown::default(),
        }
    }

    pub fn step(&self) -> OtpStep {
        self.step
    }

    pub async fn submit_details(&mut self, details: SignUpDetails) -> Result<Notice, StudieHubError> {
        validate_sign_up(&SignUpForm {
            username: &details.username,
            email: &details.email,
            mobile_number: &details.mobile_number,
            password: &details.password,
            confirm_password: &details.confirm_password,
            agree_to_terms: details.agree_to_terms,
        })?;

        self.hub
            .send_otp(details.email.trim())
            .await
            .map_err(|e| e.or_message("Failed to send OTP"))?;

        self.details = details;
        self.step = OtpStep::Otp;
        self.cooldown.start(Instant::now());
        Ok(Notice::success("OTP sent to your email!"))
    }

    pub async fn submit_otp(&mut self, otp: &str) -> Result<User, StudieHubError> {
        if self.step != OtpStep::Otp {
            return Err(StudieHubError::new("Fill in your details first"));
        }
        validate_otp(otp)?;
        let email = self.details.email.trim().to_string();

        self.hub
            .verify_otp(&email, otp.trim())
            .await
            .map_err(|e| e.or_message("Invalid OTP"))?;

        let request = RegisterRequest {
            email,
            username: self.details.username.trim().to_string(),
            mobile_number: self.details.mobile_number.trim().to_string(),
            password: self.details.password.clone(),
        };
        let user = self
            .hub
            .register(&request)
            .await
            .map_err(|e| e.or_message("Registration failed"))?;
        self.step = OtpStep::Done;
        Ok(user)
    }

    pub async fn resend(&mut self) -> Result<Notice, StudieHubError> {
        let email = self.details.email.trim().to_string();
        resend(self.hub, self.step, &email, &mut self.cooldown).await
    }

    pub fn back(&mut self) {
        self.step = OtpStep::Details;
        self.cooldown.clear();
    }
}

async fn resend(
    hub: &StudieHub,
    step: OtpStep,
    email: &str,
    cooldown: &mut ResendCooldown,
) -> Result<Notice, StudieHubError> {
    if step != OtpStep::Otp {
        return Err(StudieHubError::new("No code has been sent yet"));
    }
    cooldown.check(Instant::now())?;
    hub.resend_otp(email)
        .await
        .map_err(|e| e.or_message("Failed to resend OTP"))?;
    cooldown.start(Instant::now());
    Ok(Notice::success("OTP resent successfully!"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStep {
    Email,
    Otp,
    Reset,
    Done,
}

/// Forgot-password: request code, verify it, then set the new password.
pub struct PasswordResetFlow<'a> {
    hub: &'a StudieHub,
    step: ResetStep,
    email: String,
    otp: String,
}

impl<'a> PasswordResetFlow<'a> {
    pub fn new(hub: &'a StudieHub) -> Self {
        PasswordResetFlow {
            hub,
            step: ResetStep::Email,
            email: String::new(),
            otp: String::new(),
        }
    }

    pub fn step(&self) -> ResetStep {
        self.step
    }

    pub async fn request_code(&mut self, email: &str) -> Result<Notice, StudieHubError> {
        validate_email(email)?;
        let message = self
            .hub
            .forgot_password(email.trim())
            .await
            .map_err(|e| e.or_message("Failed to send OTP"))?;
        self.email = email.trim().to_string();
        self.step = ResetStep::Otp;
        Ok(Notice::from_message(&message, "OTP sent successfully!"))
    }

    pub async fn verify_code(&mut self, otp: &str) -> Result<Notice, StudieHubError> {
        if self.step != ResetStep::Otp {
            return Err(StudieHubError::new("Request a reset code first"));
        }
        validate_otp(otp)?;
        let message = self
            .hub
            .verify_reset_otp(&self.email, otp.trim())
            .await
            .map_err(|e| e.or_message("OTP verification failed"))?;
        self.otp = otp.trim().to_string();
        self.step = ResetStep::Reset;
        Ok(Notice::from_message(&message, "OTP verified successfully!"))
    }

    pub async fn reset(&mut self, new_password: &str, confirm_password: &str) -> Result<Notice, StudieHubError> {
        if self.step != ResetStep::Reset {
            return Err(StudieHubError::new("Verify the reset code first"));
        }
        validate_new_password(new_password, confirm_password)?;
        let message = self
            .hub
            .reset_password(&self.email, &self.otp, new_password)
            .await
            .map_err(|e| e.or_message("Password reset failed"))?;
        self.step = ResetStep::Done;
        Ok(Notice::from_message(&message, "Password reset successfully!"))
    }
}
