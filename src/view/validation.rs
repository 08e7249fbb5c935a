//! Form validation for every form the front end submits.
//!
//! Each `validate_*` function checks all fields and returns every failure at
//! once, keyed by field name.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .expect("email pattern")
});
static OTP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6}$").expect("otp pattern"));
static SIGNUP_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("mobile pattern"));
static PROFILE_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern"));
static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?(youtube\.com/watch\?v=|youtu\.be/)[a-zA-Z0-9_-]{11}.*$")
        .expect("youtube pattern")
});

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
    Pattern(&'static str),
    Mismatch,
    MustAccept,
    YouTubeUrl,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "is required"),
            FieldError::Email => write!(f, "must be a valid email address"),
            FieldError::MinLength(n) => write!(f, "must be at least {} characters", n),
            FieldError::MaxLength(n) => write!(f, "must be at most {} characters", n),
            FieldError::Pattern(hint) => write!(f, "must be {}", hint),
            FieldError::Mismatch => write!(f, "does not match"),
            FieldError::MustAccept => write!(f, "must be accepted"),
            FieldError::YouTubeUrl => write!(f, "must be a YouTube watch or youtu.be URL"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub fields: Vec<(&'static str, FieldError)>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| *name == field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, err)| err)
    }

    fn push(&mut self, field: &'static str, result: Result<(), FieldError>) {
        if let Err(err) = result {
            self.fields.push((field, err));
        }
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, err)| format!("{} {}", field, err))
            .collect();
        write!(f, "Please fix the form: {}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

pub fn required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// Required and between `min` and `max` characters (either bound optional).
pub fn length(value: &str, min: Option<usize>, max: Option<usize>) -> Result<(), FieldError> {
    required(value)?;
    let count = value.chars().count();
    if let Some(min) = min.filter(|min| count < *min) {
        return Err(FieldError::MinLength(min));
    }
    if let Some(max) = max.filter(|max| count > *max) {
        return Err(FieldError::MaxLength(max));
    }
    Ok(())
}

pub fn email(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if EMAIL.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Email)
    }
}

pub fn otp(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if OTP.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Pattern("a 6 digit code"))
    }
}

pub fn signup_mobile(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if SIGNUP_MOBILE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Pattern("a 10 digit mobile number starting with 6-9"))
    }
}

/// Optional on the profile form; when given it must be 10 digits.
pub fn profile_mobile(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() || PROFILE_MOBILE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::Pattern("a 10 digit mobile number"))
    }
}

pub fn youtube_url(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if is_youtube_url(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::YouTubeUrl)
    }
}

pub fn is_youtube_url(value: &str) -> bool {
    YOUTUBE_URL.is_match(value)
}

fn matches(value: &str, other: &str) -> Result<(), FieldError> {
    required(value)?;
    if value == other {
        Ok(())
    } else {
        Err(FieldError::Mismatch)
    }
}

pub struct SignInForm<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub fn validate_sign_in(form: &SignInForm<'_>) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("email", email(form.email));
    errors.push("password", required(form.password));
    errors.into_result()
}

pub struct SignUpForm<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub mobile_number: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub agree_to_terms: bool,
}

pub fn validate_sign_up(form: &SignUpForm<'_>) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("username", length(form.username, Some(3), Some(20)));
    errors.push("email", email(form.email));
    errors.push("mobileNumber", signup_mobile(form.mobile_number));
    errors.push("password", length(form.password, Some(6), None));
    errors.push("confirmPassword", matches(form.confirm_password, form.password));
    if !form.agree_to_terms {
        errors.push("agreeToTerms", Err(FieldError::MustAccept));
    }
    errors.into_result()
}

pub fn validate_otp(code: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("otp", otp(code));
    errors.into_result()
}

pub fn validate_email(value: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("email", email(value));
    errors.into_result()
}

pub fn validate_new_password(new_password: &str, confirm: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("newPassword", length(new_password, Some(6), None));
    errors.push("confirmPassword", matches(confirm, new_password));
    errors.into_result()
}

pub fn validate_password_change(current: &str, new_password: &str, confirm: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("currentPassword", length(current, Some(6), None));
    errors.push("newPassword", length(new_password, Some(6), None));
    errors.push("confirmPassword", matches(confirm, new_password));
    errors.into_result()
}

pub fn validate_profile(username: &str, mobile_number: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("username", length(username, Some(3), Some(50)));
    errors.push("mobileNumber", profile_mobile(mobile_number));
    errors.into_result()
}

pub fn validate_course(request: &crate::model::course::CourseRequest) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("title", length(&request.title, Some(3), Some(100)));
    errors.push("description", length(&request.description, Some(10), None));
    errors.push("categoryId", required(&request.category_id));
    errors.push(
        "difficulty",
        required(&request.difficulty).and_then(|_| {
            request
                .difficulty
                .parse::<crate::model::course::Difficulty>()
                .map(|_| ())
                .map_err(|_| FieldError::Pattern("BEGINNER, INTERMEDIATE or ADVANCED"))
        }),
    );
    errors.push("trainerName", length(&request.trainer_name, Some(2), Some(50)));
    errors.push("trainerBio", length(&request.trainer_bio, Some(10), None));
    errors.push("experience", required(&request.experience));
    errors.push("fieldOfWork", required(&request.field_of_work));
    errors.push("language", required(&request.language));
    errors.into_result()
}

pub fn validate_video(title: &str, video_url: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("title", length(title, Some(3), Some(100)));
    errors.push("videoUrl", youtube_url(video_url));
    errors.into_result()
}

pub fn validate_category(name: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push("name", length(name.trim(), Some(2), None));
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::CourseRequest;

    #[test]
    fn email_rules() {
        assert!(email("ada@example.com").is_ok());
        assert_eq!(email(""), Err(FieldError::Required));
        assert_eq!(email("ada@"), Err(FieldError::Email));
        assert_eq!(email("no-at-sign"), Err(FieldError::Email));
    }

    #[test]
    fn otp_must_be_six_digits() {
        assert!(otp("123456").is_ok());
        assert!(otp("12345").is_err());
        assert!(otp("12345a").is_err());
        assert!(otp("1234567").is_err());
    }

    #[test]
    fn mobile_patterns_differ_between_sign_up_and_profile() {
        assert!(signup_mobile("9876543210").is_ok());
        assert!(signup_mobile("1234567890").is_err());
        assert!(profile_mobile("1234567890").is_ok());
        assert!(profile_mobile("").is_ok());
        assert!(profile_mobile("12345").is_err());
    }

    #[test]
    fn youtube_urls() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("http://youtu.be/dQw4w9WgXcQ?t=10"));
        assert!(!is_youtube_url("https://vimeo.com/123"));
        assert!(!is_youtube_url("https://youtube.com/watch?v=short"));
    }

    #[test]
    fn length_counts_characters() {
        assert!(length("åäö", Some(3), Some(3)).is_ok());
        assert_eq!(length("ab", Some(3), None), Err(FieldError::MinLength(3)));
        assert_eq!(length("abcd", None, Some(3)), Err(FieldError::MaxLength(3)));
    }

    #[test]
    fn sign_up_collects_every_failure() {
        let form = SignUpForm {
            username: "ab",
            email: "ada@example.com",
            mobile_number: "5555555555",
            password: "secret1",
            confirm_password: "secret2",
            agree_to_terms: false,
        };
        let errors = validate_sign_up(&form).unwrap_err();
        assert_eq!(errors.get("username"), Some(&FieldError::MinLength(3)));
        assert!(errors.has("mobileNumber"));
        assert_eq!(errors.get("confirmPassword"), Some(&FieldError::Mismatch));
        assert_eq!(errors.get("agreeToTerms"), Some(&FieldError::MustAccept));
        assert!(!errors.has("email"));
        assert!(!errors.has("password"));
    }

    #[test]
    fn course_form_checks_difficulty_values() {
        let mut request = CourseRequest {
            title: "Rust for humans".into(),
            description: "A long enough description".into(),
            category_id: "cat-1".into(),
            difficulty: "BEGINNER".into(),
            trainer_name: "Ada".into(),
            trainer_bio: "Writes compilers for fun".into(),
            experience: "10 years".into(),
            field_of_work: "Systems".into(),
            language: "English".into(),
            ..Default::default()
        };
        assert!(validate_course(&request).is_ok());

        request.difficulty = "EXPERT".into();
        request.trainer_bio = "short".into();
        let errors = validate_course(&request).unwrap_err();
        assert!(errors.has("difficulty"));
        assert_eq!(errors.get("trainerBio"), Some(&FieldError::MinLength(10)));
    }

    #[test]
    fn category_name_is_trimmed_before_length_check() {
        assert!(validate_category("  A ").is_err());
        assert!(validate_category(" AI ").is_ok());
    }

    #[test]
    fn form_errors_display_lists_fields() {
        let errors = validate_sign_in(&SignInForm {
            email: "",
            password: "",
        })
        .unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Please fix the form: email is required; password is required"
        );
    }
}
