//! Utility modules

pub mod error;
pub mod validation;

pub use error::{AppError, AppResult, ErrorResponse};
pub use validation::{parse_object_id, validate_body, validate_query};
