// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_message;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod status_indicator;
pub mod transcript;
pub mod ui;

pub use app::App;
