//! Sign-in, sign-up and password reset against a mocked backend.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer};

use studiehub::config::Config;
use studiehub::core::client::StudieHub;
use studiehub::core::session::SessionStore;
use studiehub::view::auth_flow::{OtpStep, PasswordResetFlow, ResetStep, SignInFlow, SignUpDetails, SignUpFlow};

use common::{failure, jwt, ok, ok_message, signed_out, user_json};

#[tokio::test]
async fn two_factor_sign_in_stores_session_and_sends_bearer() {
    let server = MockServer::start().await;
    let token = jwt();

    Mock::given(method("POST"))
        .and(path("/api/auth/verify-password"))
        .and(body_json(json!({ "email": "ada@example.com", "password": "secret1" })))
        .respond_with(ok_message("Password verified"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/otp/send"))
        .and(body_json(json!({ "email": "ada@example.com" })))
        .respond_with(ok(json!("OTP sent")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/complete-login"))
        .and(body_json(json!({ "email": "ada@example.com", "otp": "123456" })))
        .respond_with(ok(json!({ "token": token, "user": user_json() })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/enrollments"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let hub = signed_out(&server);
    let mut flow = SignInFlow::new(&hub);

    let notice = flow.submit_credentials(" ada@example.com ", "secret1").await.unwrap();
    assert!(!notice.is_error());
    assert_eq!(flow.step(), OtpStep::Otp);

    let user = flow.submit_otp("123456").await.unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(flow.step(), OtpStep::Done);
    assert!(hub.is_authenticated());

    let enrollments = hub.get_enrollments().await.unwrap();
    assert!(enrollments.is_empty());
}

#[tokio::test]
async fn wrong_password_stops_before_otp() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify-password"))
        .respond_with(failure(401, "Invalid email or password"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/otp/send"))
        .respond_with(ok(json!("OTP sent")))
        .expect(0)
        .mount(&server)
        .await;

    let hub = signed_out(&server);
    let mut flow = SignInFlow::new(&hub);
    let err = flow.submit_credentials("ada@example.com", "nope12").await.unwrap_err();

    assert_eq!(err.message, "Invalid email or password");
    assert!(err.is_unauthorized());
    assert_eq!(flow.step(), OtpStep::Details);
    assert!(!hub.is_authenticated());
}

#[tokio::test]
async fn silent_backend_failure_uses_step_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify-password"))
        .respond_with(wiremock::ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let hub = signed_out(&server);
    let mut flow = SignInFlow::new(&hub);
    let err = flow.submit_credentials("ada@example.com", "secret1").await.unwrap_err();
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn invalid_form_never_reaches_backend() {
    let server = MockServer::start().await;
    let hub = signed_out(&server);
    let mut flow = SignInFlow::new(&hub);

    let err = flow.submit_credentials("not-an-email", "").await.unwrap_err();
    assert!(err.message.contains("email"));
    assert!(err.message.contains("password"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn resend_is_refused_during_cooldown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify-password"))
        .respond_with(ok_message("Password verified"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/otp/send"))
        .respond_with(ok(json!("OTP sent")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/otp/resend"))
        .respond_with(ok(json!("OTP resent")))
        .expect(0)
        .mount(&server)
        .await;

    let hub = signed_out(&server);
    let mut flow = SignInFlow::new(&hub);
    flow.submit_credentials("ada@example.com", "secret1").await.unwrap();

    let err = flow.resend().await.unwrap_err();
    assert!(err.message.starts_with("Please wait"));

    flow.back();
    assert_eq!(flow.step(), OtpStep::Details);
    let err = flow.resend().await.unwrap_err();
    assert_eq!(err.message, "No code has been sent yet");
}

#[tokio::test]
async fn invalid_otp_keeps_flow_on_otp_step() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify-password"))
        .respond_with(ok_message("Password verified"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/otp/send"))
        .respond_with(ok(json!("OTP sent")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/complete-login"))
        .respond_with(failure(400, "Invalid or expired OTP"))
        .mount(&server)
        .await;

    let hub = signed_out(&server);
    let mut flow = SignInFlow::new(&hub);
    flow.submit_credentials("ada@example.com", "secret1").await.unwrap();

    let err = flow.submit_otp("000000").await.unwrap_err();
    assert_eq!(err.message, "Invalid or expired OTP");
    assert_eq!(flow.step(), OtpStep::Otp);
    assert!(hub.current_user().is_none());
}

#[tokio::test]
async fn sign_up_verifies_otp_then_registers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/otp/send"))
        .respond_with(ok(json!("OTP sent")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/otp/verify"))
        .and(body_json(json!({ "email": "ada@example.com", "otp": "654321" })))
        .respond_with(ok(json!(true)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "username": "ada",
            "mobileNumber": "9876543210",
            "password": "secret1"
        })))
        .respond_with(ok(json!({ "token": jwt(), "user": user_json() })))
        .expect(1)
        .mount(&server)
        .await;

    let hub = signed_out(&server);
    let mut flow = SignUpFlow::new(&hub);
    flow.submit_details(SignUpDetails {
        username: "ada".into(),
        email: "ada@example.com".into(),
        mobile_number: "9876543210".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        agree_to_terms: true,
    })
    .await
    .unwrap();
    assert_eq!(flow.step(), OtpStep::Otp);

    let user = flow.submit_otp("654321").await.unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(flow.step(), OtpStep::Done);
    assert!(hub.is_authenticated());
}

#[tokio::test]
async fn sign_up_requires_accepted_terms() {
    let server = MockServer::start().await;
    let hub = signed_out(&server);
    let mut flow = SignUpFlow::new(&hub);
    let err = flow
        .submit_details(SignUpDetails {
            username: "ada".into(),
            email: "ada@example.com".into(),
            mobile_number: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            agree_to_terms: false,
        })
        .await
        .unwrap_err();
    assert!(err.message.contains("agreeToTerms"));
    assert_eq!(flow.step(), OtpStep::Details);
}

#[tokio::test]
async fn password_reset_walks_all_steps() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password"))
        .respond_with(ok_message("Password reset OTP sent to your email"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify-reset-otp"))
        .respond_with(ok_message(""))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/reset-password"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "otp": "111222",
            "newPassword": "brandnew"
        })))
        .respond_with(ok_message("Password reset successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let hub = signed_out(&server);
    let mut flow = PasswordResetFlow::new(&hub);

    let notice = flow.request_code("ada@example.com").await.unwrap();
    assert_eq!(notice.message, "Password reset OTP sent to your email");
    assert_eq!(flow.step(), ResetStep::Otp);

    let notice = flow.verify_code("111222").await.unwrap();
    assert_eq!(notice.message, "OTP verified successfully!");
    assert_eq!(flow.step(), ResetStep::Reset);

    assert!(flow.reset("brandnew", "different").await.is_err());
    flow.reset("brandnew", "brandnew").await.unwrap();
    assert_eq!(flow.step(), ResetStep::Done);
}

#[tokio::test]
async fn session_file_survives_restart_and_logout_removes_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ok(json!({ "token": jwt(), "user": user_json() })))
        .mount(&server)
        .await;

    let session_path = std::env::temp_dir()
        .join(format!("studiehub-it-{}", std::process::id()))
        .join("session.json");
    let config = Config::new(&server.uri(), &session_path).unwrap();

    let hub = StudieHub::new(config.clone()).unwrap();
    hub.login("ada@example.com", "secret1").await.unwrap();
    assert!(session_path.exists());

    let restarted = StudieHub::with_session(config, SessionStore::load(&session_path)).unwrap();
    assert!(restarted.is_authenticated());
    assert_eq!(restarted.current_user().map(|u| u.username), Some("ada".to_string()));

    restarted.logout().unwrap();
    assert!(!session_path.exists());
    assert!(!restarted.is_authenticated());

    let _ = std::fs::remove_dir_all(session_path.parent().unwrap());
}
