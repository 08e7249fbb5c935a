#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

use studiehub::config::Config;
use studiehub::core::client::StudieHub;
use studiehub::core::session::{Session, SessionStore};
use studiehub::model::user::User;

/// An unsigned JWT that expires an hour from now.
pub fn jwt() -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"ada@example.com","exp":{}}}"#, exp))
    )
}

pub fn user(roles: &[&str]) -> User {
    User {
        id: "u1".into(),
        email: "ada@example.com".into(),
        username: "ada".into(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        mobile_number: None,
    }
}

pub fn user_json() -> Value {
    json!({ "id": "u1", "email": "ada@example.com", "username": "ada", "roles": ["USER"] })
}

pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "",
        "data": data,
        "statusCode": 200,
    }))
}

pub fn ok_message(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": message,
        "data": null,
        "statusCode": 200,
    }))
}

pub fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "success": false,
        "message": message,
        "data": null,
        "statusCode": status,
    }))
}

pub fn config(server: &MockServer) -> Config {
    Config::new(&server.uri(), std::env::temp_dir().join("studiehub-unused-session.json")).unwrap()
}

pub fn signed_out(server: &MockServer) -> StudieHub {
    StudieHub::with_session(config(server), SessionStore::in_memory(Session::default())).unwrap()
}

pub fn signed_in(server: &MockServer, roles: &[&str]) -> StudieHub {
    let session = Session {
        token: Some(jwt()),
        user: Some(user(roles)),
    };
    StudieHub::with_session(config(server), SessionStore::in_memory(session)).unwrap()
}

pub fn course_json(id: &str, title: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "A practical course about systems programming.",
        "categoryId": "cat1",
        "difficulty": "BEGINNER",
        "thumbnailUrl": null,
        "videoIds": [],
        "createdAt": created_at,
        "updatedAt": created_at,
        "trainerName": "Grace Hopper",
        "trainerBio": "Compiler pioneer and teacher.",
        "experience": "30 years",
        "linkedinProfile": "grace-hopper",
        "fieldOfWork": "Compilers",
        "profilePictureUrl": null,
        "language": "English",
        "duration": null,
        "price": null
    })
}

pub fn video_json(id: &str, position: Option<u32>, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Video {}", id),
        "description": "",
        "courseId": "c1",
        "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "position": position,
        "createdAt": created_at,
        "updatedAt": created_at
    })
}

pub fn enrollment_json(course_id: &str, progress: f64) -> Value {
    json!({
        "id": format!("e-{}", course_id),
        "userId": "u1",
        "courseId": course_id,
        "courseTitle": format!("Course {}", course_id),
        "enrolledAt": "2024-01-01T10:00:00",
        "lastAccessedAt": "2024-01-02T10:00:00",
        "isCompleted": progress >= 100.0,
        "progressPercentage": progress,
        "completedVideos": 0,
        "totalVideos": 3
    })
}
