mod app;
mod commands;
mod config;
mod effects;
mod render;

pub use app::{run_app, LaunchOptions};
