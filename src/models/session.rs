//! Session (login/logout) models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identity submitted to `POST /jwt` after the client signs the user in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SessionRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub success: bool,
}

impl SessionResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
