pub mod admin;
pub mod app;
pub mod auth;
pub mod common;
pub mod config;
pub mod models;
pub mod notify;
pub mod pages;
pub mod router;
pub mod shell;
pub mod store;
pub mod views;

pub use app::ContentHub;
pub use config::HubConfig;
