pub mod chat;
pub mod config;
pub mod configuration;
pub mod dashboard;
