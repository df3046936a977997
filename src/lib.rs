pub mod cache;
pub mod cfbd;
pub mod commands;
pub mod conferences;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod schedule;
pub mod tui;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod dev;
