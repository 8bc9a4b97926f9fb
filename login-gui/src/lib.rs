pub mod app;
pub mod args;
pub mod config;
pub mod logger;
pub mod login;
pub mod notification;
pub mod view;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
