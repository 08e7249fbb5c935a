pub mod auth_flow;
pub mod catalog;
pub mod category_admin;
pub mod course_detail;
pub mod dashboard;
pub mod notice;
pub mod search;
pub mod validation;
pub mod video_management;
