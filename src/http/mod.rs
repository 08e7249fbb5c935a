pub mod auth_middleware;
pub mod request_log_middleware;
