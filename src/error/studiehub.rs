use std::error::Error as StdError;
use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub struct StudieHubError {
    pub message: String,
    /// HTTP status reported by the backend, if the failure came from a response.
    pub status: Option<StatusCode>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl StudieHubError {
    pub fn new(message: &str) -> Self {
        StudieHubError {
            message: message.to_string(),
            status: None,
            source: None,
        }
    }

    pub fn api(status: StatusCode, message: &str) -> Self {
        StudieHubError {
            message: message.to_string(),
            status: Some(status),
            source: None,
        }
    }

    /// Underlying error, if any
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status,
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND)
    }

    /// Replaces an empty backend message with `default`.
    pub fn or_message(mut self, default: &str) -> Self {
        if self.message.is_empty() {
            self.message = default.to_string();
        }
        self
    }

    /// The backend reports duplicate enrollments only through the message text.
    pub fn is_already_enrolled(&self) -> bool {
        self.message.to_lowercase().contains("already enrolled")
    }
}

impl fmt::Display for StudieHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = if self.message.is_empty() {
            "Request failed"
        } else {
            self.message.as_str()
        };
        match self.status {
            Some(status) => write!(f, "{} (HTTP {})", message, status.as_u16()),
            None => write!(f, "{}", message),
        }
    }
}

// Covers reqwest, serde_json, io and url errors. StudieHubError must not
// implement std::error::Error itself or this overlaps with `From<T> for T`.
impl<E: StdError + Send + Sync + 'static> From<E> for StudieHubError {
    fn from(err: E) -> Self {
        StudieHubError {
            message: err.to_string(),
            status: None,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_when_present() {
        let err = StudieHubError::api(StatusCode::NOT_FOUND, "Course not found");
        assert_eq!(err.to_string(), "Course not found (HTTP 404)");
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn empty_message_falls_back() {
        let err = StudieHubError::api(StatusCode::BAD_REQUEST, "");
        assert_eq!(err.to_string(), "Request failed (HTTP 400)");
        let err = err.or_message("Invalid OTP");
        assert_eq!(err.message, "Invalid OTP");
        let kept = StudieHubError::new("OTP expired").or_message("Invalid OTP");
        assert_eq!(kept.message, "OTP expired");
    }

    #[test]
    fn converts_std_errors_and_keeps_source() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: StudieHubError = parse_err.into();
        assert!(err.status.is_none());
        assert!(err.source_error().is_some());
    }

    #[test]
    fn already_enrolled_is_detected_case_insensitively() {
        let err = StudieHubError::api(StatusCode::CONFLICT, "User is Already Enrolled in this course");
        assert!(err.is_already_enrolled());
        assert!(!StudieHubError::new("Course not found").is_already_enrolled());
    }
}
