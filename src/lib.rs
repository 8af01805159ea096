//! Libris Library Catalog Server
//!
//! A Rust REST JSON API for managing a library catalog of books, authors,
//! categories and publishers, with JWT-authenticated access and CSV export.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
