//! Input validation utilities

use uuid::Uuid;
use validator::Validate;

use super::AppError;

/// Parse a record identifier taken from the path
pub fn parse_object_id(id: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id.trim()).map_err(|_| AppError::bad_request(format!("Invalid {} ID", what)))
}

/// Validate a JSON body (422 on failure)
pub fn validate_body<T: Validate>(body: &T) -> Result<(), AppError> {
    body.validate().map_err(AppError::from)
}

/// Validate query parameters (400 on failure)
pub fn validate_query<T: Validate>(query: &T) -> Result<(), AppError> {
    query
        .validate()
        .map_err(|e| AppError::bad_request(e.to_string()))
}
