//! Volunteer request and confirmation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_REQUEST_STATUS: &str = "requested";

/// Identity of the applicant embedded in requests and confirmations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct Volunteer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(email(message = "volunteer.email must be a valid email address"))]
    pub email: String,
}

/// An application by a volunteer to a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolunteerRequest {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub post_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,
    pub volunteer: Volunteer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl VolunteerRequest {
    /// Whether `email` may withdraw or dismiss this request
    pub fn is_party(&self, email: &str) -> bool {
        self.volunteer.email == email || self.organizer_email.as_deref() == Some(email)
    }
}

/// Body of `POST /volunteerRequests`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewVolunteerRequest {
    pub post_id: Uuid,
    #[validate(length(max = 200))]
    pub post_title: Option<String>,
    #[validate(email)]
    pub organizer_email: Option<String>,
    #[validate(nested)]
    pub volunteer: Volunteer,
    #[validate(length(max = 2000))]
    pub suggestion: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
}

/// Record of an accepted request; append-only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestConfirmation {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub post_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_title: Option<String>,
    pub volunteer: Volunteer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /volunteerReqConfirmations`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewRequestConfirmation {
    pub post_id: Uuid,
    pub request_id: Option<Uuid>,
    #[validate(length(max = 200))]
    pub post_title: Option<String>,
    #[validate(nested)]
    pub volunteer: Volunteer,
    #[validate(email)]
    pub organizer_email: Option<String>,
}
