pub mod admin_stats;
pub mod api_response;
pub mod category;
pub mod course;
pub mod enrollment;
pub mod nullable;
pub mod user;
pub mod video;
