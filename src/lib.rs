pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod http;
pub mod logging;
pub mod model;
pub mod utils;
pub mod view;
