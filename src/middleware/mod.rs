//! Middleware components
//!
//! Session authentication (JWT in an http-only cookie).

pub mod auth;

pub use auth::{auth_middleware, create_session_token, validate_token, AuthError, AuthUser, Claims};
