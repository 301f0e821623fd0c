//! VolunTrack server library
//!
//! REST backend for coordinating volunteer opportunities: posts published by
//! organizers, requests from volunteers and confirmations of accepted requests.

pub mod api;
pub mod config;
pub mod db;
pub mod middleware;
pub mod models;
pub mod utils;

pub use config::AppConfig;
pub use db::DbPool;
pub use middleware::{auth_middleware, AuthUser, Claims};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Database connection pool
    pub db: DbPool,
}
