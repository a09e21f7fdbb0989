pub mod args;
pub mod config;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod notification;
pub mod services;
pub mod signin;
pub mod signup;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name displayed in window titles and log lines.
pub const APP_NAME: &str = "Branch Signup";
