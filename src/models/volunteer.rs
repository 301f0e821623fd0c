//! Volunteer post models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Largest page a client may request from the pagination endpoint
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page size used when the client does not send one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A volunteer opportunity published by an organizer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolunteerPost {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub organizer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,
    pub post_title: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
    /// Remaining volunteers wanted; decremented per accepted request and never floored
    pub no_of_volunteers_needed: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /volunteers` and `PUT /volunteers/{id}`
///
/// Unknown fields are rejected rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VolunteerPostInput {
    #[validate(email(message = "organizer_email must be a valid email address"))]
    pub organizer_email: String,
    #[validate(length(max = 100))]
    pub organizer_name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub post_title: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub deadline: DateTime<Utc>,
    #[validate(range(min = 0, message = "no_of_volunteers_needed cannot be negative"))]
    pub no_of_volunteers_needed: i64,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(url)]
    pub thumbnail: Option<String>,
}

/// Query string of `GET /volunteers-email`
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizerQuery {
    pub email: Option<String>,
}

/// Query string of `GET /totalVolunteers`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PageQuery {
    /// 1-based page number
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub size: Option<u64>,
    /// Exact category match
    pub filter: Option<String>,
    /// Case-insensitive substring of the title, matched as sent
    pub search: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Rows to skip: `(page - 1) * size`
    pub fn offset(&self) -> i64 {
        let skip = (self.page() - 1).saturating_mul(self.size());
        i64::try_from(skip).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        // size() is clamped to MAX_PAGE_SIZE
        self.size() as i64
    }

    pub fn category(&self) -> Option<&str> {
        non_empty(self.filter.as_deref())
    }

    pub fn title_search(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }
}

/// An empty parameter counts as absent; anything else is used verbatim
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountResponse {
    pub count: i64,
}
