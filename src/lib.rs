pub mod config;
pub mod date_utils;
pub mod error;
pub mod locale;
pub mod models;
pub mod services;
pub mod theme;

/// Application version from Cargo.toml (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
