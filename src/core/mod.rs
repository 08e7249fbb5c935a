pub mod admin;
pub mod auth;
pub mod category;
pub mod client;
pub mod course;
pub mod enrollment;
pub mod session;
pub mod user;
pub mod video;

pub use client::StudieHub;
